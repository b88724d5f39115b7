//! View-mode slice.

use serde::{Deserialize, Serialize};

use super::Action;

/// How icons are sized when presented.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Intrinsic size from the icon's viewBox.
    #[default]
    Actual,
    /// Every icon drawn in the same square box.
    Fixed,
}

impl ViewMode {
    /// The other mode.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Actual => Self::Fixed,
            Self::Fixed => Self::Actual,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actual => "actual",
            Self::Fixed => "fixed",
        }
    }

    /// Human label ("Actual Size" / "Fixed Size").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Actual => "Actual Size",
            Self::Fixed => "Fixed Size",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "actual" => Ok(Self::Actual),
            "fixed" => Ok(Self::Fixed),
            other => Err(format!("unknown view mode `{other}` (expected `actual` or `fixed`)")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewModeState {
    pub mode: ViewMode,
}

impl ViewModeState {
    pub const fn new(mode: ViewMode) -> Self {
        Self { mode }
    }
}

/// Pure reducer for the view-mode slice.
pub fn view_mode_reducer(state: ViewModeState, action: &Action) -> ViewModeState {
    match action {
        Action::SetViewMode(mode) => ViewModeState { mode: *mode },
        _ => state,
    }
}
