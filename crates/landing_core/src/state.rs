//! Page state and the reducer that drives it.
//!
//! `update` is the only way the state changes. Timed steps of the intro come
//! back as `UiAction::Schedule` effects for the host to deliver later, so the
//! reducer itself never reads a clock.

use std::time::Duration;

use shared::domain::ItemId;
use thiserror::Error;
use tracing::debug;

use crate::{
    intro::{IntroStage, IntroTimings},
    mobile::{MobileEffect, MobileMsg, MobileState},
    tile::{click_intent, ClickIntent, CLICK_EXIT_DELAY},
    viewport::{LayoutClass, Viewport},
};

/// Intro stage together with the tile it concerns. Only `Finished` and
/// `ReturnOverlayIn` can hold an open tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    Idle,
    LogoOut {
        target: Option<ItemId>,
    },
    OverlayIn {
        target: Option<ItemId>,
    },
    Reveal {
        target: Option<ItemId>,
    },
    Finished {
        active: Option<ItemId>,
    },
    ReturnOverlayIn {
        active: Option<ItemId>,
    },
    ReturnReveal,
}

impl Scene {
    pub fn stage(self) -> IntroStage {
        match self {
            Scene::Idle => IntroStage::Idle,
            Scene::LogoOut { .. } => IntroStage::LogoOut,
            Scene::OverlayIn { .. } => IntroStage::OverlayIn,
            Scene::Reveal { .. } => IntroStage::Reveal,
            Scene::Finished { .. } => IntroStage::Finished,
            Scene::ReturnOverlayIn { .. } => IntroStage::ReturnOverlayIn,
            Scene::ReturnReveal => IntroStage::ReturnReveal,
        }
    }

    pub fn active_id(self) -> Option<ItemId> {
        match self {
            Scene::Finished { active } | Scene::ReturnOverlayIn { active } => active,
            _ => None,
        }
    }

    pub fn is_any_active(self) -> bool {
        self.active_id().is_some()
    }

    /// Tile waiting to open once the intro completes.
    pub fn pending_target(self) -> Option<ItemId> {
        match self {
            Scene::LogoOut { target } | Scene::OverlayIn { target } | Scene::Reveal { target } => {
                target
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub layout: LayoutClass,
    pub scene: Scene,
    pub portrait_selection: ItemId,
    pub hovered: Option<ItemId>,
    pub mobile: MobileState,
}

pub const DEFAULT_PORTRAIT_SELECTION: ItemId = ItemId::DevSolutions;

impl UiState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            layout: viewport.layout(),
            scene: Scene::Idle,
            portrait_selection: DEFAULT_PORTRAIT_SELECTION,
            hovered: None,
            mobile: MobileState::default(),
        }
    }

    /// State after the intro has played, optionally with `active` open.
    /// In portrait the tile becomes the portrait selection instead.
    pub fn settled(layout: LayoutClass, active: Option<ItemId>) -> Self {
        let mut state = Self::new(layout.nominal_viewport());
        let active = active.filter(|id| !id.is_hero());
        if layout.is_portrait() {
            if let Some(id) = active {
                state.portrait_selection = id;
            }
            state.scene = Scene::Finished { active: None };
        } else {
            state.scene = Scene::Finished { active };
        }
        state
    }

    pub fn stage(&self) -> IntroStage {
        self.scene.stage()
    }

    pub fn active_id(&self) -> Option<ItemId> {
        self.scene.active_id()
    }

    pub fn timings(&self) -> IntroTimings {
        IntroTimings::for_layout(self.layout)
    }

    /// Width stealing only happens on the closed landscape grid.
    pub fn hover_enabled(&self) -> bool {
        self.layout.is_landscape() && !self.stage().is_intro_mode() && !self.scene.is_any_active()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Activate(ItemId),
    Close,
    BackToIntro,
    /// Raw tile click, resolved through the click rules.
    Click(ItemId),
    /// Delivered by the host when a scheduled step is due; carries the stage
    /// that scheduled it.
    TimerElapsed(IntroStage),
    Hover(Option<ItemId>),
    Resize(Viewport),
    Mobile(MobileMsg),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    Schedule { after: Duration, msg: Msg },
    ScrollIntoView(ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionRejected {
    #[error("intro sequence in progress at `{stage}`")]
    IntroInProgress { stage: IntroStage },
    #[error("`hero` has no detail panel")]
    HeroHasNoDetail,
    #[error("back to intro requires a finished intro, stage is `{stage}`")]
    NotFinished { stage: IntroStage },
    #[error("stale timer from `{from}`, stage is now `{current}`")]
    StaleTimer {
        from: IntroStage,
        current: IntroStage,
    },
    #[error("no timed step leaves `{stage}`")]
    Untimed { stage: IntroStage },
}

pub fn update(state: &mut UiState, msg: Msg) -> Result<Vec<UiAction>, TransitionRejected> {
    let outcome = apply(state, msg);
    if !state.hover_enabled() {
        state.hovered = None;
    }
    match &outcome {
        Ok(actions) => debug!(
            ?msg,
            stage = %state.stage(),
            active = ?state.active_id(),
            effects = actions.len(),
            "ui transition applied"
        ),
        Err(reason) => debug!(?msg, %reason, "ui transition rejected"),
    }
    outcome
}

fn apply(state: &mut UiState, msg: Msg) -> Result<Vec<UiAction>, TransitionRejected> {
    match msg {
        Msg::Activate(id) => activate(state, id),
        Msg::Close => close(state),
        Msg::BackToIntro => back_to_intro(state),
        Msg::Click(id) => match click_intent(id, state) {
            ClickIntent::Ignore => Ok(Vec::new()),
            ClickIntent::Activate(id) => activate(state, id),
            ClickIntent::Close => close(state),
            ClickIntent::ActivateAfterExit(id) => Ok(vec![UiAction::Schedule {
                after: CLICK_EXIT_DELAY,
                msg: Msg::Activate(id),
            }]),
        },
        Msg::TimerElapsed(from) => timer_elapsed(state, from),
        Msg::Hover(id) => {
            state.hovered = id;
            Ok(Vec::new())
        }
        Msg::Resize(viewport) => {
            state.layout = viewport.layout();
            if state.layout.is_portrait() {
                if let Some(id) = state.active_id() {
                    state.portrait_selection = id;
                }
            }
            Ok(Vec::new())
        }
        Msg::Mobile(msg) => Ok(match state.mobile.update(msg) {
            Some(MobileEffect::ScheduleReveal { id, after }) => vec![UiAction::Schedule {
                after,
                msg: Msg::Mobile(MobileMsg::RevealExpanded(id)),
            }],
            Some(MobileEffect::ScrollIntoView(id)) => vec![UiAction::ScrollIntoView(id)],
            None => Vec::new(),
        }),
    }
}

fn activate(state: &mut UiState, id: ItemId) -> Result<Vec<UiAction>, TransitionRejected> {
    match state.scene {
        Scene::Idle => Ok(start_intro(state, Some(id).filter(|id| !id.is_hero()))),
        Scene::Finished { .. } if id.is_hero() => Err(TransitionRejected::HeroHasNoDetail),
        Scene::Finished { .. } if state.layout.is_portrait() => {
            state.portrait_selection = id;
            Ok(Vec::new())
        }
        Scene::Finished { .. } => {
            state.scene = Scene::Finished { active: Some(id) };
            Ok(Vec::new())
        }
        scene => Err(TransitionRejected::IntroInProgress {
            stage: scene.stage(),
        }),
    }
}

fn close(state: &mut UiState) -> Result<Vec<UiAction>, TransitionRejected> {
    match state.scene {
        Scene::Idle => Ok(start_intro(state, None)),
        Scene::Finished { .. } => {
            state.scene = Scene::Finished { active: None };
            Ok(Vec::new())
        }
        scene => Err(TransitionRejected::IntroInProgress {
            stage: scene.stage(),
        }),
    }
}

fn back_to_intro(state: &mut UiState) -> Result<Vec<UiAction>, TransitionRejected> {
    match state.scene {
        Scene::Finished { active } => {
            state.scene = Scene::ReturnOverlayIn { active };
            Ok(schedule_next(state))
        }
        scene => Err(TransitionRejected::NotFinished {
            stage: scene.stage(),
        }),
    }
}

fn start_intro(state: &mut UiState, target: Option<ItemId>) -> Vec<UiAction> {
    state.scene = Scene::LogoOut { target };
    schedule_next(state)
}

fn schedule_next(state: &UiState) -> Vec<UiAction> {
    let stage = state.stage();
    state
        .timings()
        .dwell(stage)
        .map(|after| UiAction::Schedule {
            after,
            msg: Msg::TimerElapsed(stage),
        })
        .into_iter()
        .collect()
}

fn timer_elapsed(state: &mut UiState, from: IntroStage) -> Result<Vec<UiAction>, TransitionRejected> {
    let current = state.stage();
    if from != current {
        return Err(TransitionRejected::StaleTimer { from, current });
    }
    state.scene = match state.scene {
        Scene::LogoOut { target } => Scene::OverlayIn { target },
        Scene::OverlayIn { target } => Scene::Reveal { target },
        Scene::Reveal { target } if state.layout.is_portrait() => {
            if let Some(id) = target {
                state.portrait_selection = id;
            }
            Scene::Finished { active: None }
        }
        Scene::Reveal { target } => Scene::Finished { active: target },
        Scene::ReturnOverlayIn { .. } => Scene::ReturnReveal,
        Scene::ReturnReveal => Scene::Idle,
        Scene::Idle | Scene::Finished { .. } => {
            return Err(TransitionRejected::Untimed { stage: current })
        }
    };
    Ok(schedule_next(state))
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
