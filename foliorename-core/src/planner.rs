use crate::config::{Mode, RuleConfig, StartSide, TargetKind, WidthGrowth};
use crate::entries::Entry;
use crate::error::Error;
use crate::sequence::{format_folio, grown_width};
use serde::{Deserialize, Serialize};

/// One planned rename, in processing order. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub source_name: String,
    pub target_name: String,
    pub is_dir: bool,
}

/// The full plan for a run, built before any rename is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPlan {
    pub items: Vec<PlanItem>,
    /// Entries that did not match the target kind and were never planned.
    pub skipped: usize,
}

/// Compute the target name for every eligible entry. Pure: no filesystem
/// access, deterministic over the same inputs.
pub fn plan_renames(entries: &[Entry], config: &RuleConfig) -> Result<NamingPlan, Error> {
    match config.mode {
        Mode::Split => plan_split(entries, config),
        Mode::Combined => plan_combined(entries, config),
    }
}

fn is_eligible(entry: &Entry, kind: TargetKind) -> bool {
    match kind {
        TargetKind::Files => !entry.is_dir,
        TargetKind::Folders => entry.is_dir,
    }
}

/// Extension by the last-dot rule, including the dot. Directories never have
/// one, and `ignore_extension` forces it empty for files without a real
/// suffix.
fn extension_of(entry: &Entry, ignore_extension: bool) -> &str {
    if entry.is_dir || ignore_extension {
        return "";
    }
    match entry.name.rfind('.') {
        Some(dot) => &entry.name[dot..],
        None => "",
    }
}

/// Split mode: each entry is a single recto or verso face. Recto and the
/// verso of the same folio share a number; the counter advances once per
/// completed pair.
fn plan_split(entries: &[Entry], config: &RuleConfig) -> Result<NamingPlan, Error> {
    let mut plan = NamingPlan::default();
    let mut parity: usize = match config.start_side {
        StartSide::Recto => 0,
        StartSide::Verso => 1,
    };
    let mut completed_pairs: u32 = 0;
    let mut width = config.digit_width;

    for entry in entries {
        if !is_eligible(entry, config.target_kind) {
            plan.skipped += 1;
            continue;
        }

        let extension = extension_of(entry, config.ignore_extension);
        let number = i64::from(config.starting_number) + i64::from(completed_pairs);

        if config.width_growth == WidthGrowth::Live {
            width = grown_width(number, width);
        }
        let sequence = format_folio(number, width)?;
        if config.width_growth == WidthGrowth::Configured {
            // thresholds checked against the configured start, after the
            // current name is formatted
            width = grown_width(i64::from(config.starting_number), width);
        }

        let label = if parity % 2 == 0 {
            config.recto_label()
        } else {
            config.verso_label()
        };

        plan.items.push(PlanItem {
            source_name: entry.name.clone(),
            target_name: format!(
                "{}{}{}{}{}",
                config.prefix, sequence, label, config.suffix, extension
            ),
            is_dir: entry.is_dir,
        });

        if parity % 2 != 0 {
            completed_pairs += 1;
        }
        parity += 1;
    }

    Ok(plan)
}

/// Combined mode: each entry is a two-page spread showing the verso of folio
/// N-1 and the recto of folio N. The first spread's verso folio is
/// `starting_number - 1`, which may be negative when starting from 0; it is
/// rendered as-is, never clamped.
fn plan_combined(entries: &[Entry], config: &RuleConfig) -> Result<NamingPlan, Error> {
    let mut plan = NamingPlan::default();
    let mut spread_index: i64 = 0;
    let mut width = config.digit_width;

    for entry in entries {
        if !is_eligible(entry, config.target_kind) {
            plan.skipped += 1;
            continue;
        }

        let extension = extension_of(entry, config.ignore_extension);
        let recto_folio = i64::from(config.starting_number) + spread_index;
        let verso_folio = recto_folio - 1;

        if config.width_growth == WidthGrowth::Live {
            width = grown_width(recto_folio, width);
        }
        let verso_sequence = format_folio(verso_folio, width)?;
        let recto_sequence = format_folio(recto_folio, width)?;
        if config.width_growth == WidthGrowth::Configured {
            width = grown_width(i64::from(config.starting_number), width);
        }

        plan.items.push(PlanItem {
            source_name: entry.name.clone(),
            target_name: format!(
                "{}{}{}{}{}{}{}{}",
                config.prefix,
                verso_sequence,
                config.verso_label(),
                config.separator,
                recto_sequence,
                config.recto_label(),
                config.suffix,
                extension
            ),
            is_dir: entry.is_dir,
        });

        spread_index += 1;
    }

    Ok(plan)
}
