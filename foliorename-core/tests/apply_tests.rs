use foliorename_core::{
    execute_plan, execute_plan_with, list_entries, plan_renames, ExecuteOptions, NamingPlan,
    Outcome, PlanItem, Renamer, RuleConfig,
};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tempfile::TempDir;

fn plan_of(items: &[(&str, &str)]) -> NamingPlan {
    NamingPlan {
        items: items
            .iter()
            .map(|(source, target)| PlanItem {
                source_name: (*source).to_string(),
                target_name: (*target).to_string(),
                is_dir: false,
            })
            .collect(),
        skipped: 0,
    }
}

#[test]
fn test_execute_renames_in_plan_order() {
    let temp_dir = TempDir::new().unwrap();
    File::create(temp_dir.path().join("a.jpg")).unwrap();
    File::create(temp_dir.path().join("b.jpg")).unwrap();

    let plan = plan_of(&[("a.jpg", "0001r.jpg"), ("b.jpg", "0001v.jpg")]);
    let result = execute_plan(temp_dir.path(), &plan, &ExecuteOptions::default()).unwrap();

    assert_eq!(result.attempted, 2);
    assert_eq!(result.failed, 0);
    assert_eq!(result.renamed(), 2);
    assert!(result.is_success());
    assert!(temp_dir.path().join("0001r.jpg").exists());
    assert!(temp_dir.path().join("0001v.jpg").exists());
    assert!(!temp_dir.path().join("a.jpg").exists());
}

#[test]
fn test_dry_run_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    File::create(temp_dir.path().join("a.jpg")).unwrap();
    File::create(temp_dir.path().join("b.jpg")).unwrap();

    let before = list_entries(temp_dir.path()).unwrap();

    let plan = plan_of(&[("a.jpg", "0001r.jpg"), ("b.jpg", "0001v.jpg")]);
    let options = ExecuteOptions {
        dry_run: true,
        ..Default::default()
    };
    let result = execute_plan(temp_dir.path(), &plan, &options).unwrap();

    assert_eq!(result.attempted, 2);
    assert_eq!(result.failed, 0);
    assert!(result
        .items
        .iter()
        .all(|i| i.outcome == Outcome::Simulated));

    let after = list_entries(temp_dir.path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_failure_does_not_abort_the_run() {
    let temp_dir = TempDir::new().unwrap();
    File::create(temp_dir.path().join("a.jpg")).unwrap();
    // b.jpg is missing, its rename will fail
    File::create(temp_dir.path().join("c.jpg")).unwrap();

    let plan = plan_of(&[
        ("a.jpg", "0001r.jpg"),
        ("b.jpg", "0001v.jpg"),
        ("c.jpg", "0002r.jpg"),
    ]);
    let result = execute_plan(temp_dir.path(), &plan, &ExecuteOptions::default()).unwrap();

    assert_eq!(result.attempted, 3);
    assert_eq!(result.failed, 1);
    assert_eq!(result.renamed(), 2);
    assert!(!result.is_success());
    assert!(matches!(result.items[1].outcome, Outcome::Failed(_)));
    // the item after the failure was still processed
    assert!(temp_dir.path().join("0002r.jpg").exists());
}

#[test]
fn test_no_collision_detection_between_targets() {
    // two items mapped to the same target: the second rename clobbers (or
    // fails, platform-dependent) but is attempted either way
    let temp_dir = TempDir::new().unwrap();
    File::create(temp_dir.path().join("a.jpg")).unwrap();
    File::create(temp_dir.path().join("b.jpg")).unwrap();

    let plan = plan_of(&[("a.jpg", "same.jpg"), ("b.jpg", "same.jpg")]);
    let result = execute_plan(temp_dir.path(), &plan, &ExecuteOptions::default()).unwrap();

    assert_eq!(result.attempted, 2);
    assert!(temp_dir.path().join("same.jpg").exists());
}

#[test]
fn test_trace_log_records_every_item() {
    let temp_dir = TempDir::new().unwrap();
    File::create(temp_dir.path().join("a.jpg")).unwrap();

    let log_path = temp_dir.path().join("logs").join("run.log");
    let plan = plan_of(&[("a.jpg", "0001r.jpg")]);
    let options = ExecuteOptions {
        dry_run: false,
        log_file: Some(log_path.clone()),
    };
    execute_plan(temp_dir.path(), &plan, &options).unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("a.jpg -> 0001r.jpg: renamed"));
}

struct RecordingRenamer {
    calls: Vec<(String, String)>,
    fail_on: Option<String>,
}

impl Renamer for RecordingRenamer {
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        let from_name = from.file_name().unwrap().to_string_lossy().to_string();
        self.calls
            .push((from_name.clone(), to.file_name().unwrap().to_string_lossy().to_string()));
        if self.fail_on.as_deref() == Some(from_name.as_str()) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        Ok(())
    }
}

#[test]
fn test_fake_renamer_sees_joined_paths_in_order() {
    let plan = plan_of(&[("a.jpg", "0001r.jpg"), ("b.jpg", "0001v.jpg")]);
    let mut renamer = RecordingRenamer {
        calls: vec![],
        fail_on: None,
    };

    let result = execute_plan_with(
        Path::new("/scans"),
        &plan,
        &ExecuteOptions::default(),
        &mut renamer,
    )
    .unwrap();

    assert!(result.is_success());
    assert_eq!(
        renamer.calls,
        vec![
            ("a.jpg".to_string(), "0001r.jpg".to_string()),
            ("b.jpg".to_string(), "0001v.jpg".to_string()),
        ]
    );
}

#[test]
fn test_fake_renamer_failure_is_counted_and_reported() {
    let plan = plan_of(&[("a.jpg", "1r.jpg"), ("b.jpg", "1v.jpg"), ("c.jpg", "2r.jpg")]);
    let mut renamer = RecordingRenamer {
        calls: vec![],
        fail_on: Some("b.jpg".to_string()),
    };

    let result = execute_plan_with(
        Path::new("/scans"),
        &plan,
        &ExecuteOptions::default(),
        &mut renamer,
    )
    .unwrap();

    assert_eq!(result.failed, 1);
    assert_eq!(renamer.calls.len(), 3);
    match &result.items[1].outcome {
        Outcome::Failed(reason) => assert!(reason.contains("denied")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_end_to_end_plan_then_execute() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["IMG_0002.jpg", "img_0001.jpg", "IMG_0003.jpg", "IMG_0004.jpg"] {
        File::create(temp_dir.path().join(name)).unwrap();
    }

    let entries = list_entries(temp_dir.path()).unwrap();
    let config = RuleConfig {
        starting_number: 99,
        digit_width: 4,
        ..Default::default()
    };
    let plan = plan_renames(&entries, &config).unwrap();
    // case-insensitive ordering puts img_0001 first
    assert_eq!(plan.items[0].source_name, "img_0001.jpg");

    let result = execute_plan(temp_dir.path(), &plan, &ExecuteOptions::default()).unwrap();
    assert!(result.is_success());

    let renamed = list_entries(temp_dir.path()).unwrap();
    let names: Vec<&str> = renamed.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["0099r.jpg", "0099v.jpg", "0100r.jpg", "0100v.jpg"]
    );
}
