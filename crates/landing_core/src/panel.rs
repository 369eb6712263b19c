use content::{catalog, I18n};
use shared::domain::ItemId;

use crate::{
    layout::{side_of, GridPlacement, Side, LANDSCAPE_PANEL_PLACEMENT, PORTRAIT_PANEL_PLACEMENT},
    paging::Presentation,
    state::UiState,
};

pub const ENTRANCE_OFFSET_PX: i32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Where the panel slides in from, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntranceOffset {
    pub x: i32,
    pub y: i32,
}

/// The open tile's content surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentralPanel {
    pub item: ItemId,
    pub title: String,
    pub subtitle: Option<String>,
    pub theme: Theme,
    pub entrance: EntranceOffset,
    pub placement: GridPlacement,
    pub presentation: Presentation,
}

impl CentralPanel {
    /// Panel for the current state, if one is on screen. Mobile renders its
    /// own accordion and never shows it.
    pub fn for_state(state: &UiState, i18n: &I18n) -> Option<Self> {
        let (item, entrance, placement, presentation) = if state.layout.is_portrait() {
            if state.stage().is_intro_mode() {
                return None;
            }
            (
                state.portrait_selection,
                EntranceOffset {
                    x: 0,
                    y: ENTRANCE_OFFSET_PX,
                },
                PORTRAIT_PANEL_PLACEMENT,
                Presentation::Stacked,
            )
        } else if state.layout.is_landscape() {
            let item = state.active_id()?;
            let x = match side_of(item) {
                Some(Side::Left) => -ENTRANCE_OFFSET_PX,
                _ => ENTRANCE_OFFSET_PX,
            };
            (
                item,
                EntranceOffset { x, y: 0 },
                LANDSCAPE_PANEL_PLACEMENT,
                Presentation::Paged,
            )
        } else {
            return None;
        };
        let entry = catalog::item(item);
        Some(Self {
            item,
            title: i18n.item_title(entry),
            subtitle: i18n.item_subtitle(entry),
            theme: if entry.is_dark_theme() {
                Theme::Dark
            } else {
                Theme::Light
            },
            entrance,
            placement,
            presentation,
        })
    }

    pub fn background(&self) -> &'static str {
        catalog::item(self.item).background
    }
}
