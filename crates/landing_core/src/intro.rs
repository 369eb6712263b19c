use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::viewport::{LayoutClass, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntroStage {
    Idle,
    LogoOut,
    OverlayIn,
    Reveal,
    Finished,
    ReturnOverlayIn,
    ReturnReveal,
}

impl IntroStage {
    pub fn as_str(self) -> &'static str {
        match self {
            IntroStage::Idle => "idle",
            IntroStage::LogoOut => "logo-out",
            IntroStage::OverlayIn => "overlay-in",
            IntroStage::Reveal => "reveal",
            IntroStage::Finished => "finished",
            IntroStage::ReturnOverlayIn => "return-overlay-in",
            IntroStage::ReturnReveal => "return-reveal",
        }
    }

    /// Stages where only the hero palette is on screen.
    pub fn is_intro_mode(self) -> bool {
        matches!(
            self,
            IntroStage::Idle | IntroStage::LogoOut | IntroStage::OverlayIn | IntroStage::ReturnReveal
        )
    }

    pub fn overlay_visible(self) -> bool {
        matches!(
            self,
            IntroStage::OverlayIn
                | IntroStage::Reveal
                | IntroStage::ReturnOverlayIn
                | IntroStage::ReturnReveal
        )
    }

    /// The "let's go" caption only shows on the way in.
    pub fn overlay_caption_visible(self) -> bool {
        matches!(self, IntroStage::OverlayIn | IntroStage::Reveal)
    }

    pub fn hero_exiting(self) -> bool {
        matches!(self, IntroStage::LogoOut | IntroStage::OverlayIn)
    }
}

impl fmt::Display for IntroStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time spent in each timed stage before the next one begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroTimings {
    pub logo_out: Duration,
    pub overlay_in: Duration,
    pub reveal: Duration,
    pub return_overlay_in: Duration,
    pub return_reveal: Duration,
}

impl IntroTimings {
    pub const LANDSCAPE: IntroTimings = IntroTimings {
        logo_out: Duration::from_millis(1100),
        overlay_in: Duration::from_millis(2400),
        reveal: Duration::from_millis(1000),
        return_overlay_in: Duration::from_millis(600),
        return_reveal: Duration::from_millis(800),
    };

    pub const PORTRAIT: IntroTimings = IntroTimings {
        logo_out: Duration::from_millis(600),
        overlay_in: Duration::from_millis(1900),
        reveal: Duration::from_millis(1000),
        return_overlay_in: Duration::from_millis(600),
        return_reveal: Duration::from_millis(800),
    };

    pub fn for_layout(layout: LayoutClass) -> Self {
        match layout.orientation() {
            Orientation::Portrait => Self::PORTRAIT,
            Orientation::Landscape => Self::LANDSCAPE,
        }
    }

    /// How long `stage` lasts, `None` for the resting stages.
    pub fn dwell(&self, stage: IntroStage) -> Option<Duration> {
        match stage {
            IntroStage::LogoOut => Some(self.logo_out),
            IntroStage::OverlayIn => Some(self.overlay_in),
            IntroStage::Reveal => Some(self.reveal),
            IntroStage::ReturnOverlayIn => Some(self.return_overlay_in),
            IntroStage::ReturnReveal => Some(self.return_reveal),
            IntroStage::Idle | IntroStage::Finished => None,
        }
    }

    /// Click-to-finished total.
    pub fn entry_total(&self) -> Duration {
        self.logo_out + self.overlay_in + self.reveal
    }

    pub fn return_total(&self) -> Duration {
        self.return_overlay_in + self.return_reveal
    }
}
