//! Section pager for the landscape detail panel.

use std::time::{Duration, Instant};

use tracing::debug;

pub const WHEEL_THRESHOLD: f64 = 20.0;
pub const SWIPE_THRESHOLD: f64 = 50.0;
pub const PAGE_LOCKOUT: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// One section per page, driven by wheel, swipe and keys.
    Paged,
    /// Every section in one vertical stack; page input is ignored.
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageInput {
    Wheel { delta_y: f64 },
    /// Touch start and end y coordinates.
    Swipe { start_y: f64, end_y: f64 },
    Key(PageKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    ArrowDown,
    PageDown,
    ArrowUp,
    PageUp,
}

impl PageKey {
    /// Maps a `KeyboardEvent.key` value; other keys do not page.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(PageKey::ArrowDown),
            "PageDown" => Some(PageKey::PageDown),
            "ArrowUp" => Some(PageKey::ArrowUp),
            "PageUp" => Some(PageKey::PageUp),
            _ => None,
        }
    }
}

impl PageInput {
    pub fn direction(self) -> Option<Direction> {
        match self {
            PageInput::Wheel { delta_y } if delta_y.abs() > WHEEL_THRESHOLD => {
                Some(if delta_y > 0.0 {
                    Direction::Down
                } else {
                    Direction::Up
                })
            }
            PageInput::Swipe { start_y, end_y } => {
                let diff = start_y - end_y;
                (diff.abs() > SWIPE_THRESHOLD).then_some(if diff > 0.0 {
                    Direction::Down
                } else {
                    Direction::Up
                })
            }
            PageInput::Key(PageKey::ArrowDown | PageKey::PageDown) => Some(Direction::Down),
            PageInput::Key(PageKey::ArrowUp | PageKey::PageUp) => Some(Direction::Up),
            PageInput::Wheel { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    len: usize,
    index: usize,
    presentation: Presentation,
    locked_until: Option<Instant>,
}

impl Pager {
    pub fn new(len: usize, presentation: Presentation) -> Self {
        Self {
            len,
            index: 0,
            presentation,
            locked_until: None,
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        if index < self.len {
            self.index = index;
        }
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Applies one input. Returns whether the page changed.
    pub fn handle(&mut self, input: PageInput, now: Instant) -> bool {
        if self.presentation == Presentation::Stacked || self.is_locked(now) {
            return false;
        }
        let Some(direction) = input.direction() else {
            return false;
        };
        let next = match direction {
            Direction::Down if self.index + 1 < self.len => self.index + 1,
            Direction::Up if self.index > 0 => self.index - 1,
            _ => return false,
        };
        self.index = next;
        self.locked_until = Some(now + PAGE_LOCKOUT);
        debug!(index = next, ?direction, "section page changed");
        true
    }

    /// Dot-rail navigation; ignores the lockout and may skip pages.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.presentation == Presentation::Stacked || index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    pub fn show_scroll_hint(&self) -> bool {
        self.presentation == Presentation::Paged && self.index == 0 && self.len > 1
    }
}
