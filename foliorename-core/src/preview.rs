use crate::planner::NamingPlan;
use comfy_table::{Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Summary,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Render the plan in the specified format.
pub fn render_plan(
    plan: &NamingPlan,
    format: Preview,
    use_color: bool,
    fixed_table_width: bool,
) -> String {
    match format {
        Preview::Table => render_table(plan, use_color, fixed_table_width),
        Preview::Summary => render_summary(plan),
        Preview::None => String::new(),
    }
}

/// Render the plan as a Source | Kind | Target table with a totals footer.
pub fn render_table(plan: &NamingPlan, use_color: bool, fixed_table_width: bool) -> String {
    let mut table = Table::new();

    let fixed_constraints = vec![
        ColumnConstraint::Absolute(Width::Fixed(50)), // Source
        ColumnConstraint::Absolute(Width::Fixed(8)),  // Kind
        ColumnConstraint::Absolute(Width::Fixed(60)), // Target
    ];

    if fixed_table_width || !io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_constraints(fixed_constraints);
    } else {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    }

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Source").fg(Color::Cyan),
            Cell::new("Kind").fg(Color::Cyan),
            Cell::new("Target").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Source", "Kind", "Target"]);
    }

    for item in &plan.items {
        let kind = if item.is_dir { "Dir" } else { "File" };
        if use_color {
            table.add_row(vec![
                Cell::new(&item.source_name),
                Cell::new(kind).fg(Color::Blue),
                Cell::new(format!("→ {}", item.target_name)).fg(Color::Magenta),
            ]);
        } else {
            table.add_row(vec![
                &item.source_name,
                kind,
                &format!("→ {}", item.target_name),
            ]);
        }
    }

    let totals = format!("{} renames, {} skipped", plan.items.len(), plan.skipped);
    if use_color {
        table.add_row(vec![
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
        ]);
        table.add_row(vec![
            Cell::new("TOTALS").fg(Color::Cyan),
            Cell::new(""),
            Cell::new(totals).fg(Color::White),
        ]);
    } else {
        table.add_row(vec!["─────────", "─────────", "─────────"]);
        table.add_row(vec!["TOTALS", "", &totals]);
    }

    table.to_string()
}

/// Plain-text rendering, one `source -> target` line per item, in the style
/// of the original tool's output window.
pub fn render_summary(plan: &NamingPlan) -> String {
    let mut output = String::new();
    for item in &plan.items {
        writeln!(output, "{} -> {}", item.source_name, item.target_name).unwrap();
    }
    writeln!(
        output,
        "{} planned renames, {} entries skipped",
        plan.items.len(),
        plan.skipped
    )
    .unwrap();
    output
}
