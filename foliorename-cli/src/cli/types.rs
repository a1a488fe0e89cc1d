use clap::ValueEnum;
use foliorename_core::{Mode, Preview, StartSide};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum ModeArg {
    /// Each entry is a single recto or verso face
    Split,
    /// Each entry is a two-page spread (verso of folio N, recto of folio N+1)
    Combined,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Split => Self::Split,
            ModeArg::Combined => Self::Combined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum SideArg {
    Recto,
    Verso,
}

impl From<SideArg> for StartSide {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Recto => Self::Recto,
            SideArg::Verso => Self::Verso,
        }
    }
}

/// The recto marker styles of the original tool's combo box.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum RectoMarkerArg {
    R,
    Recto,
    None,
    A,
}

impl RectoMarkerArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R => "r",
            Self::Recto => "recto",
            Self::None => "",
            Self::A => "A",
        }
    }
}

/// The verso marker styles of the original tool's combo box.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum VersoMarkerArg {
    V,
    Verso,
    B,
}

impl VersoMarkerArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V => "v",
            Self::Verso => "verso",
            Self::B => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum PreviewArg {
    Table,
    Summary,
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Table => Self::Table,
            PreviewArg::Summary => Self::Summary,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for foliorename_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
