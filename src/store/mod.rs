//! Application state: the loaded icons and the current view mode.
//!
//! Two independent slices, each updated by a pure reducer. Every dispatched
//! [`Action`] goes through both reducers; a reducer leaves its slice alone for
//! actions it does not own.
//!
//! | Slice       | Actions                      |
//! |-------------|------------------------------|
//! | `icons`     | `LoadIcons`, `ClearIcons`    |
//! | `view_mode` | `SetViewMode`                |

mod icons;
mod view_mode;

pub use icons::{IconsState, icons_reducer};
pub use view_mode::{ViewMode, ViewModeState, view_mode_reducer};

use crate::sprite::Icon;

/// Messages accepted by [`Store::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the icon list.
    LoadIcons(Vec<Icon>),
    /// Empty the icon list.
    ClearIcons,
    SetViewMode(ViewMode),
}

impl Action {
    /// Action type label, for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoadIcons(_) => "[SpriteStudio] Load Icons",
            Self::ClearIcons => "[SpriteStudio] Clear Icons",
            Self::SetViewMode(_) => "[SpriteStudio] Set View Mode",
        }
    }
}

/// Holds both slices for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct Store {
    icons: IconsState,
    view_mode: ViewModeState,
}

impl Store {
    /// Empty store starting in `mode`.
    pub fn new(mode: ViewMode) -> Self {
        Self {
            icons: IconsState::default(),
            view_mode: ViewModeState::new(mode),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        crate::debug!("store"; "{}", action.kind());
        self.icons = icons_reducer(std::mem::take(&mut self.icons), &action);
        self.view_mode = view_mode_reducer(self.view_mode, &action);
    }

    #[inline]
    pub fn icons(&self) -> &[Icon] {
        &self.icons.icons
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.mode
    }
}
