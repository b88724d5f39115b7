//! Icons slice.

use super::Action;
use crate::sprite::Icon;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconsState {
    pub icons: Vec<Icon>,
}

/// Pure reducer for the icons slice.
///
/// `LoadIcons` replaces the whole list; there is no merging.
pub fn icons_reducer(state: IconsState, action: &Action) -> IconsState {
    match action {
        Action::LoadIcons(icons) => IconsState {
            icons: icons.clone(),
        },
        Action::ClearIcons => IconsState { icons: Vec::new() },
        Action::SetViewMode(_) => state,
    }
}
