//! Two-pane phone page: a hero pane and the service list below it.

use std::time::Duration;

use content::catalog;
use shared::domain::ItemId;

pub const SWIPE_THRESHOLD: f64 = 80.0;
pub const WHEEL_UP_THRESHOLD: f64 = -20.0;
pub const FOOTER_REVEAL_DISTANCE: f64 = 20.0;
pub const SCROLL_INTO_VIEW_DELAY: Duration = Duration::from_millis(100);
pub const CONTACT_DOCK_BUBBLE_PX: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileSection {
    #[default]
    Hero,
    List,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileState {
    pub section: MobileSection,
    pub expanded: Option<ItemId>,
    pub footer_visible: bool,
}

/// Scroll metrics of the list pane at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListScroll {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ListScroll {
    pub fn at_top(self) -> bool {
        self.scroll_top <= 0.0
    }

    pub fn near_bottom(self) -> bool {
        self.scroll_height - self.scroll_top - self.client_height <= FOOTER_REVEAL_DISTANCE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MobileMsg {
    /// Vertical swipe; `dy` is start minus end, positive when moving up.
    Swipe {
        dy: f64,
        started_at_top: bool,
        list_at_top: bool,
    },
    Wheel { delta_y: f64, list_at_top: bool },
    ListScrolled(ListScroll),
    Toggle(ItemId),
    /// Fires after the expand delay; scrolls only if still expanded.
    RevealExpanded(ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileEffect {
    ScheduleReveal { id: ItemId, after: Duration },
    ScrollIntoView(ItemId),
}

/// Everything but `hero` and `contact`, with `team` moved to the end.
pub fn list_items() -> Vec<ItemId> {
    let mut items: Vec<ItemId> = catalog::items()
        .map(|item| item.id)
        .filter(|id| !matches!(id, ItemId::Hero | ItemId::Contact | ItemId::Team))
        .collect();
    items.push(ItemId::Team);
    items
}

impl MobileState {
    pub fn update(&mut self, msg: MobileMsg) -> Option<MobileEffect> {
        match msg {
            MobileMsg::Swipe {
                dy,
                started_at_top,
                list_at_top,
            } => {
                match self.section {
                    MobileSection::Hero if dy > SWIPE_THRESHOLD => {
                        self.section = MobileSection::List;
                    }
                    MobileSection::List
                        if dy < -SWIPE_THRESHOLD && list_at_top && started_at_top =>
                    {
                        self.section = MobileSection::Hero;
                    }
                    _ => {}
                }
                None
            }
            MobileMsg::Wheel {
                delta_y,
                list_at_top,
            } => {
                match self.section {
                    MobileSection::Hero if delta_y > 0.0 => self.section = MobileSection::List,
                    MobileSection::List if list_at_top && delta_y < WHEEL_UP_THRESHOLD => {
                        self.section = MobileSection::Hero;
                    }
                    _ => {}
                }
                None
            }
            MobileMsg::ListScrolled(scroll) => {
                self.footer_visible = scroll.near_bottom();
                None
            }
            MobileMsg::Toggle(id) => {
                if self.expanded == Some(id) {
                    self.expanded = None;
                    None
                } else {
                    self.expanded = Some(id);
                    Some(MobileEffect::ScheduleReveal {
                        id,
                        after: SCROLL_INTO_VIEW_DELAY,
                    })
                }
            }
            MobileMsg::RevealExpanded(id) => {
                (self.expanded == Some(id)).then_some(MobileEffect::ScrollIntoView(id))
            }
        }
    }

    /// The contact dock shrinks to a bubble while another item is open and
    /// the footer is hidden.
    pub fn contact_dock_collapsed(&self) -> bool {
        self.expanded.is_some_and(|id| id != ItemId::Contact) && !self.footer_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(dy: f64, started_at_top: bool, list_at_top: bool) -> MobileMsg {
        MobileMsg::Swipe {
            dy,
            started_at_top,
            list_at_top,
        }
    }

    #[test]
    fn list_order_puts_team_last_and_skips_hero_and_contact() {
        let items = list_items();
        assert_eq!(items.len(), 10);
        assert_eq!(items.first(), Some(&ItemId::DevSolutions));
        assert_eq!(items.last(), Some(&ItemId::Team));
        assert!(!items.contains(&ItemId::Hero));
        assert!(!items.contains(&ItemId::Contact));
    }

    #[test]
    fn swipe_up_past_threshold_opens_list() {
        let mut state = MobileState::default();
        state.update(swipe(80.0, true, true));
        assert_eq!(state.section, MobileSection::Hero);
        state.update(swipe(81.0, true, true));
        assert_eq!(state.section, MobileSection::List);
    }

    #[test]
    fn swipe_down_returns_only_from_the_top() {
        let mut state = MobileState {
            section: MobileSection::List,
            ..MobileState::default()
        };
        state.update(swipe(-120.0, false, true));
        assert_eq!(state.section, MobileSection::List);
        state.update(swipe(-120.0, true, false));
        assert_eq!(state.section, MobileSection::List);
        state.update(swipe(-120.0, true, true));
        assert_eq!(state.section, MobileSection::Hero);
    }

    #[test]
    fn wheel_moves_between_panes() {
        let mut state = MobileState::default();
        state.update(MobileMsg::Wheel {
            delta_y: 3.0,
            list_at_top: true,
        });
        assert_eq!(state.section, MobileSection::List);
        state.update(MobileMsg::Wheel {
            delta_y: -15.0,
            list_at_top: true,
        });
        assert_eq!(state.section, MobileSection::List);
        state.update(MobileMsg::Wheel {
            delta_y: -25.0,
            list_at_top: false,
        });
        assert_eq!(state.section, MobileSection::List);
        state.update(MobileMsg::Wheel {
            delta_y: -25.0,
            list_at_top: true,
        });
        assert_eq!(state.section, MobileSection::Hero);
    }

    #[test]
    fn accordion_keeps_one_item_open_and_scrolls_after_delay() {
        let mut state = MobileState::default();
        let effect = state.update(MobileMsg::Toggle(ItemId::Conseil));
        assert_eq!(
            effect,
            Some(MobileEffect::ScheduleReveal {
                id: ItemId::Conseil,
                after: Duration::from_millis(100)
            })
        );
        state.update(MobileMsg::Toggle(ItemId::Finance));
        assert_eq!(state.expanded, Some(ItemId::Finance));
        assert_eq!(state.update(MobileMsg::RevealExpanded(ItemId::Conseil)), None);
        assert_eq!(
            state.update(MobileMsg::RevealExpanded(ItemId::Finance)),
            Some(MobileEffect::ScrollIntoView(ItemId::Finance))
        );
        assert_eq!(state.update(MobileMsg::Toggle(ItemId::Finance)), None);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn footer_and_contact_dock_follow_scroll_position() {
        let mut state = MobileState::default();
        state.update(MobileMsg::Toggle(ItemId::Team));
        state.update(MobileMsg::ListScrolled(ListScroll {
            scroll_top: 500.0,
            scroll_height: 1400.0,
            client_height: 800.0,
        }));
        assert!(!state.footer_visible);
        assert!(state.contact_dock_collapsed());
        state.update(MobileMsg::ListScrolled(ListScroll {
            scroll_top: 585.0,
            scroll_height: 1400.0,
            client_height: 800.0,
        }));
        assert!(state.footer_visible);
        assert!(!state.contact_dock_collapsed());
    }
}
