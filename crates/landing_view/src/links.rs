//! Hrefs that stand in for click handlers, so the rendered page navigates
//! through the same transitions without a script.

use landing_core::{
    tile::{click_intent, ClickIntent},
    LayoutClass, UiState,
};
use shared::domain::ItemId;

pub const INTRO_PATH: &str = "/";
pub const GRID_PATH: &str = "/grid";

pub fn item_path(id: ItemId) -> String {
    format!("/services/{id}")
}

pub fn locale_path(code: &str) -> String {
    format!("/locale/{code}")
}

/// `?layout=` suffix for anything but the default landscape layout.
pub fn with_layout(path: &str, layout: LayoutClass) -> String {
    if layout == LayoutClass::Landscape {
        path.to_string()
    } else {
        format!("{path}?layout={layout}")
    }
}

pub fn with_section(path: &str, layout: LayoutClass, index: usize) -> String {
    let base = with_layout(path, layout);
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}section={index}")
}

/// Where a click on the tile leads, `None` when the click is ignored.
pub fn tile_href(id: ItemId, state: &UiState) -> Option<String> {
    let path = match click_intent(id, state) {
        ClickIntent::Ignore => return None,
        ClickIntent::Activate(ItemId::Hero) | ClickIntent::Close => GRID_PATH.to_string(),
        ClickIntent::Activate(target) | ClickIntent::ActivateAfterExit(target) => item_path(target),
    };
    Some(with_layout(&path, state.layout))
}

/// Accordion toggle on the phone layout.
pub fn mobile_toggle_href(id: ItemId, state: &UiState) -> String {
    let path = if state.mobile.expanded == Some(id) {
        GRID_PATH.to_string()
    } else {
        item_path(id)
    };
    with_layout(&path, LayoutClass::Mobile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_grid_links_tiles_to_their_detail() {
        let state = UiState::settled(LayoutClass::Landscape, None);
        assert_eq!(tile_href(ItemId::Conseil, &state).as_deref(), Some("/services/conseil"));
        assert_eq!(tile_href(ItemId::Hero, &state), None);
    }

    #[test]
    fn open_tile_links_back_to_the_grid() {
        let state = UiState::settled(LayoutClass::Landscape, Some(ItemId::Team));
        assert_eq!(tile_href(ItemId::Team, &state).as_deref(), Some("/grid"));
        assert_eq!(tile_href(ItemId::Hero, &state).as_deref(), Some("/grid"));
    }

    #[test]
    fn portrait_links_keep_the_layout() {
        let state = UiState::settled(LayoutClass::Portrait, None);
        assert_eq!(
            tile_href(ItemId::Finance, &state).as_deref(),
            Some("/services/finance?layout=portrait")
        );
        assert_eq!(
            with_section("/services/finance", LayoutClass::Portrait, 2),
            "/services/finance?layout=portrait&section=2"
        );
        assert_eq!(with_section("/services/finance", LayoutClass::Landscape, 1), "/services/finance?section=1");
    }

    #[test]
    fn mobile_toggle_collapses_the_open_item() {
        let mut state = UiState::settled(LayoutClass::Mobile, None);
        assert_eq!(mobile_toggle_href(ItemId::Formation, &state), "/services/formation?layout=mobile");
        state.mobile.expanded = Some(ItemId::Formation);
        assert_eq!(mobile_toggle_href(ItemId::Formation, &state), "/grid?layout=mobile");
    }
}
