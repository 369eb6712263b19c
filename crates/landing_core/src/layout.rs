//! Position tables for the 12-column, 6-row desktop grid.

use content::catalog;
use shared::domain::ItemId;

pub const GRID_COLUMNS: u8 = 12;
pub const GRID_ROWS: u8 = 6;

/// CSS grid placement, 1-based like `grid-column-start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    pub col_start: u8,
    pub col_span: u8,
    pub row_start: u8,
    pub row_span: u8,
}

impl GridPlacement {
    pub const fn new(col_start: u8, col_span: u8, row_start: u8, row_span: u8) -> Self {
        Self {
            col_start,
            col_span,
            row_start,
            row_span,
        }
    }

    pub fn col_end(self) -> u8 {
        self.col_start + self.col_span
    }

    pub fn row_end(self) -> u8 {
        self.row_start + self.row_span
    }

    /// `grid-column`/`grid-row` declarations for an inline style.
    pub fn css(self) -> String {
        format!(
            "grid-column:{} / span {};grid-row:{} / span {};",
            self.col_start, self.col_span, self.row_start, self.row_span
        )
    }

    pub fn overlaps(self, other: GridPlacement) -> bool {
        self.col_start < other.col_end()
            && other.col_start < self.col_end()
            && self.row_start < other.row_end()
            && other.row_start < self.row_end()
    }
}

/// Hero during the intro: the whole grid.
pub const INTRO_PLACEMENT: GridPlacement = GridPlacement::new(1, GRID_COLUMNS, 1, GRID_ROWS);

/// Hero once a tile is open: the left rail.
pub const ACTIVE_HERO_PLACEMENT: GridPlacement = GridPlacement::new(1, 1, 1, GRID_ROWS);

/// Where the open tile's content sits in landscape.
pub const LANDSCAPE_PANEL_PLACEMENT: GridPlacement = GridPlacement::new(3, 9, 1, GRID_ROWS);

/// Where the selected tile's content sits under the portrait nav.
pub const PORTRAIT_PANEL_PLACEMENT: GridPlacement = GridPlacement::new(1, GRID_COLUMNS, 2, 5);

/// Closed-grid start cells, `(id, col_start, row_start)`.
pub const DEFAULT_POSITIONS: [(ItemId, u8, u8); 12] = [
    (ItemId::Hero, 1, 1),
    (ItemId::DevSolutions, 3, 1),
    (ItemId::Conseil, 7, 1),
    (ItemId::Optimisation, 3, 2),
    (ItemId::DataAnalysis, 10, 2),
    (ItemId::Automatisation, 3, 3),
    (ItemId::Formation, 9, 3),
    (ItemId::Maintenance, 3, 4),
    (ItemId::Finance, 8, 4),
    (ItemId::WhyUs, 3, 5),
    (ItemId::Contact, 3, 6),
    (ItemId::Team, 9, 6),
];

pub fn closed_placement(id: ItemId) -> GridPlacement {
    let item = catalog::item(id);
    let (col_start, row_start) = DEFAULT_POSITIONS
        .iter()
        .find(|(candidate, _, _)| *candidate == id)
        .map(|(_, col, row)| (*col, *row))
        .unwrap_or((1, 1));
    GridPlacement::new(col_start, item.col_span, row_start, item.row_span)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub const LEFT_COLUMN: u8 = 2;
pub const RIGHT_COLUMN: u8 = 12;

/// Sidebar stack order while a tile is open, `(id, row_start, row_span)`.
pub const LEFT_SIDEBAR: [(ItemId, u8, u8); 5] = [
    (ItemId::DevSolutions, 1, 1),
    (ItemId::Optimisation, 2, 1),
    (ItemId::Automatisation, 3, 1),
    (ItemId::Maintenance, 4, 1),
    (ItemId::Contact, 5, 2),
];

pub const RIGHT_SIDEBAR: [(ItemId, u8, u8); 6] = [
    (ItemId::Conseil, 1, 1),
    (ItemId::DataAnalysis, 2, 1),
    (ItemId::Formation, 3, 1),
    (ItemId::Finance, 4, 1),
    (ItemId::WhyUs, 5, 1),
    (ItemId::Team, 6, 1),
];

pub fn side_of(id: ItemId) -> Option<Side> {
    if LEFT_SIDEBAR.iter().any(|(candidate, _, _)| *candidate == id) {
        Some(Side::Left)
    } else if RIGHT_SIDEBAR.iter().any(|(candidate, _, _)| *candidate == id) {
        Some(Side::Right)
    } else {
        None
    }
}

pub fn sidebar_placement(id: ItemId) -> Option<(Side, GridPlacement)> {
    let lookup = |table: &[(ItemId, u8, u8)], column: u8| {
        table
            .iter()
            .find(|(candidate, _, _)| *candidate == id)
            .map(|(_, row, span)| GridPlacement::new(column, 1, *row, *span))
    };
    lookup(&LEFT_SIDEBAR, LEFT_COLUMN)
        .map(|placement| (Side::Left, placement))
        .or_else(|| lookup(&RIGHT_SIDEBAR, RIGHT_COLUMN).map(|placement| (Side::Right, placement)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Square,
    Wide,
}

impl Aspect {
    pub fn css(self) -> &'static str {
        match self {
            Aspect::Square => "1 / 1",
            Aspect::Wide => "2 / 1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortraitCell {
    pub id: ItemId,
    pub order: u8,
    pub col_span: u8,
    pub aspect: Aspect,
}

const fn cell(id: ItemId, order: u8) -> PortraitCell {
    PortraitCell {
        id,
        order,
        col_span: 1,
        aspect: Aspect::Square,
    }
}

/// Portrait nav strip. `contact` closes the strip as a double-width cell.
pub const PORTRAIT_NAV: [PortraitCell; 11] = [
    cell(ItemId::DevSolutions, 1),
    cell(ItemId::Conseil, 2),
    cell(ItemId::Optimisation, 3),
    cell(ItemId::DataAnalysis, 4),
    cell(ItemId::Automatisation, 5),
    cell(ItemId::Formation, 6),
    cell(ItemId::Maintenance, 7),
    cell(ItemId::Finance, 8),
    cell(ItemId::WhyUs, 9),
    cell(ItemId::Team, 10),
    PortraitCell {
        id: ItemId::Contact,
        order: 11,
        col_span: 2,
        aspect: Aspect::Wide,
    },
];

pub fn portrait_cell(id: ItemId) -> Option<PortraitCell> {
    PORTRAIT_NAV.iter().copied().find(|cell| cell.id == id)
}

/// Hover partners sharing a row, left tile first.
pub const HOVER_PAIRS: [(ItemId, ItemId); 5] = [
    (ItemId::DevSolutions, ItemId::Conseil),
    (ItemId::Optimisation, ItemId::DataAnalysis),
    (ItemId::Automatisation, ItemId::Formation),
    (ItemId::Maintenance, ItemId::Finance),
    (ItemId::Contact, ItemId::Team),
];

/// The pair holding `id` and whether `id` is its left member.
pub fn hover_pair(id: ItemId) -> Option<((ItemId, ItemId), bool)> {
    HOVER_PAIRS
        .iter()
        .copied()
        .find(|(left, right)| *left == id || *right == id)
        .map(|pair| (pair, pair.0 == id))
}
