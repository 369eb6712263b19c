//! How each tile is drawn for a given page state.

use std::time::Duration;

use content::catalog;
use shared::domain::ItemId;

use crate::{
    layout::{
        closed_placement, hover_pair, portrait_cell, sidebar_placement, GridPlacement,
        PortraitCell, Side, ACTIVE_HERO_PLACEMENT, INTRO_PLACEMENT,
    },
    state::UiState,
};

/// Delay between a sidebar tile's exit animation and its activation.
pub const CLICK_EXIT_DELAY: Duration = Duration::from_millis(250);

pub const RESTING_SCALE: f64 = 1.005;
pub const EXPANSION_FACTOR: f64 = 0.15;
pub const SCALE_BUFFER: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroVisibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitRole {
    Header,
    NavCell { cell: PortraitCell, selected: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Grid(GridPlacement),
    Sidebar {
        side: Side,
        placement: GridPlacement,
        active: bool,
    },
    IntroPalette(IntroVisibility),
    PortraitNav(PortraitRole),
}

impl RenderMode {
    pub fn placement(self) -> Option<GridPlacement> {
        match self {
            RenderMode::Grid(placement) | RenderMode::Sidebar { placement, .. } => Some(placement),
            RenderMode::IntroPalette(IntroVisibility::Visible) => Some(INTRO_PLACEMENT),
            RenderMode::IntroPalette(IntroVisibility::Hidden) | RenderMode::PortraitNav(_) => None,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == RenderMode::IntroPalette(IntroVisibility::Hidden)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RenderMode::Grid(_) => "tile--grid",
            RenderMode::Sidebar { active: true, .. } => "tile--sidebar tile--active",
            RenderMode::Sidebar { .. } => "tile--sidebar",
            RenderMode::IntroPalette(IntroVisibility::Visible) => "tile--palette",
            RenderMode::IntroPalette(IntroVisibility::Hidden) => "tile--hidden",
            RenderMode::PortraitNav(PortraitRole::Header) => "tile--portrait-header",
            RenderMode::PortraitNav(PortraitRole::NavCell { selected: true, .. }) => {
                "tile--nav tile--selected"
            }
            RenderMode::PortraitNav(PortraitRole::NavCell { .. }) => "tile--nav",
        }
    }
}

/// Exactly one mode per tile: intro first (in every layout), then the
/// portrait flow, then the open layout, then the closed grid.
pub fn render_mode(id: ItemId, state: &UiState) -> RenderMode {
    if state.stage().is_intro_mode() {
        return RenderMode::IntroPalette(if id.is_hero() {
            IntroVisibility::Visible
        } else {
            IntroVisibility::Hidden
        });
    }
    if state.layout.is_portrait() {
        return RenderMode::PortraitNav(match portrait_cell(id) {
            Some(cell) => PortraitRole::NavCell {
                cell,
                selected: state.portrait_selection == id,
            },
            None => PortraitRole::Header,
        });
    }
    if let Some(active) = state.active_id() {
        if id.is_hero() {
            return RenderMode::Sidebar {
                side: Side::Left,
                placement: ACTIVE_HERO_PLACEMENT,
                active: false,
            };
        }
        if let Some((side, placement)) = sidebar_placement(id) {
            return RenderMode::Sidebar {
                side,
                placement,
                active: active == id,
            };
        }
    }
    RenderMode::Grid(closed_placement(id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickIntent {
    Ignore,
    Activate(ItemId),
    Close,
    /// Activate once the exit animation has played.
    ActivateAfterExit(ItemId),
}

pub fn click_intent(id: ItemId, state: &UiState) -> ClickIntent {
    if state.stage().is_intro_mode() {
        return ClickIntent::Activate(id);
    }
    if state.layout.is_portrait() {
        return if id.is_hero() {
            ClickIntent::Ignore
        } else {
            ClickIntent::Activate(id)
        };
    }
    let any_active = state.scene.is_any_active();
    if id.is_hero() {
        return if any_active {
            ClickIntent::Close
        } else {
            ClickIntent::Ignore
        };
    }
    if state.active_id() == Some(id) {
        ClickIntent::Close
    } else {
        ClickIntent::ActivateAfterExit(id)
    }
}

/// Horizontal scale applied to a tile and the origin it grows from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    pub scale_x: f64,
    pub origin_x: f64,
}

impl ScaleConfig {
    pub const IDENTITY: ScaleConfig = ScaleConfig {
        scale_x: 1.0,
        origin_x: 0.0,
    };

    /// Counter-scale keeping the tile's content undistorted.
    pub fn content_scale_x(self) -> f64 {
        if self.scale_x != 0.0 {
            1.0 / self.scale_x
        } else {
            1.0
        }
    }
}

pub fn scale_config(id: ItemId, state: &UiState) -> ScaleConfig {
    if !state.layout.is_landscape() || state.stage().is_intro_mode() || state.scene.is_any_active()
    {
        return ScaleConfig::IDENTITY;
    }
    let pair = hover_pair(id);
    let origin_x = match pair {
        Some((_, true)) => 0.0,
        Some((_, false)) => 1.0,
        None => 0.5,
    };
    let mut scale_x = RESTING_SCALE;
    if let (Some(hovered), Some(((left, right), is_left))) = (state.hovered, pair) {
        let partner = if is_left { right } else { left };
        if hovered == id {
            scale_x = 1.0 + EXPANSION_FACTOR + SCALE_BUFFER;
        } else if hovered == partner {
            let partner_span = f64::from(catalog::item(partner).col_span);
            let my_span = f64::from(catalog::item(id).col_span);
            scale_x = 1.0 - (partner_span * EXPANSION_FACTOR) / my_span + SCALE_BUFFER;
        }
    }
    ScaleConfig { scale_x, origin_x }
}

/// Stacking order: the open tile on top, then the hero, then the rest.
pub fn z_index(id: ItemId, state: &UiState) -> u8 {
    if state.layout.is_portrait() {
        return if !id.is_hero() && state.portrait_selection == id {
            50
        } else {
            30
        };
    }
    if state.active_id() == Some(id) {
        40
    } else if state.scene.is_any_active() {
        if id.is_hero() {
            35
        } else {
            30
        }
    } else if id.is_hero() {
        30
    } else if state.hovered == Some(id) {
        25
    } else {
        20
    }
}

#[cfg(test)]
#[path = "tests/tile_tests.rs"]
mod tests;
