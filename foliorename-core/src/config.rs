use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Which directory entries a run is allowed to touch. Files and folders are
/// never mixed in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Files,
    Folders,
}

/// Whether each entry is a single folio face or a two-page spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Split,
    Combined,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Combined => "combined",
        }
    }
}

/// Side of the first eligible entry in split mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartSide {
    Recto,
    Verso,
}

/// How the digit width grows during a run.
///
/// `Configured` reproduces the original tool: the thresholds are checked
/// against the configured starting number after each name is generated, so
/// the width is a function of configuration, not of the running folio value.
/// `Live` checks the folio number actually being formatted instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthGrowth {
    Configured,
    Live,
}

/// The complete rule set for one run. Built once from validated caller input
/// and read-only from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub target_kind: TargetKind,
    /// Treat the full file name (including any suffix) as the base name.
    pub ignore_extension: bool,
    /// Literal text prepended to every generated name,
    /// e.g. "Paris, BnF, lat. 16480, fol. ".
    pub prefix: String,
    /// Literal text appended after the recto/verso label, before the extension.
    pub suffix: String,
    pub starting_number: u32,
    /// Initial zero-pad width, at least 1. May grow mid-run, never shrinks.
    pub digit_width: usize,
    pub mode: Mode,
    /// Split mode only.
    pub start_side: StartSide,
    /// Text immediately before/after the recto marker.
    pub recto_label_prefix: String,
    pub recto_label_suffix: String,
    /// Text immediately before/after the verso marker.
    pub verso_label_prefix: String,
    pub verso_label_suffix: String,
    pub recto_marker: String,
    pub verso_marker: String,
    /// Combined mode only: text between the verso and recto halves.
    pub separator: String,
    pub width_growth: WidthGrowth,
    /// Compute the plan and the result, but perform no filesystem mutation.
    pub dry_run: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            target_kind: TargetKind::Files,
            ignore_extension: false,
            prefix: String::new(),
            suffix: String::new(),
            starting_number: 1,
            digit_width: 1,
            mode: Mode::Split,
            start_side: StartSide::Recto,
            recto_label_prefix: String::new(),
            recto_label_suffix: String::new(),
            verso_label_prefix: String::new(),
            verso_label_suffix: String::new(),
            recto_marker: "r".to_string(),
            verso_marker: "v".to_string(),
            separator: " - ".to_string(),
            width_growth: WidthGrowth::Configured,
            dry_run: false,
        }
    }
}

impl RuleConfig {
    /// Recto label as it appears in a generated name.
    pub fn recto_label(&self) -> String {
        format!(
            "{}{}{}",
            self.recto_label_prefix, self.recto_marker, self.recto_label_suffix
        )
    }

    /// Verso label as it appears in a generated name.
    pub fn verso_label(&self) -> String {
        format!(
            "{}{}{}",
            self.verso_label_prefix, self.verso_marker, self.verso_label_suffix
        )
    }
}

/// Parse the starting folio number from raw caller input.
pub fn parse_starting_number(s: &str) -> Result<u32, Error> {
    s.trim().parse::<u32>().map_err(|_| {
        Error::InvalidConfig(format!(
            "starting number must be a non-negative integer, got '{s}'"
        ))
    })
}

/// Parse the digit width from raw caller input. An empty selection means 1,
/// matching the original tool's blank combo-box entry.
pub fn parse_digit_width(s: &str) -> Result<usize, Error> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(1);
    }
    match trimmed.parse::<usize>() {
        Ok(width) if width >= 1 => Ok(width),
        _ => Err(Error::InvalidConfig(format!(
            "digit width must be a positive integer, got '{s}'"
        ))),
    }
}
