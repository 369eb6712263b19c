use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::domain::UnknownValue;

/// Widths below this render the mobile two-pane page.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn layout(self) -> LayoutClass {
        if self.width < MOBILE_BREAKPOINT {
            LayoutClass::Mobile
        } else if self.height > self.width {
            LayoutClass::Portrait
        } else {
            LayoutClass::Landscape
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1440, 900)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutClass {
    Mobile,
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl LayoutClass {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutClass::Mobile => "mobile",
            LayoutClass::Portrait => "portrait",
            LayoutClass::Landscape => "landscape",
        }
    }

    /// Mobile counts as landscape; only tall desktop viewports are portrait.
    pub fn orientation(self) -> Orientation {
        match self {
            LayoutClass::Portrait => Orientation::Portrait,
            LayoutClass::Mobile | LayoutClass::Landscape => Orientation::Landscape,
        }
    }

    pub fn is_portrait(self) -> bool {
        self == LayoutClass::Portrait
    }

    pub fn is_landscape(self) -> bool {
        self == LayoutClass::Landscape
    }

    pub fn is_mobile(self) -> bool {
        self == LayoutClass::Mobile
    }

    /// A representative viewport for rendering without a real window.
    pub fn nominal_viewport(self) -> Viewport {
        match self {
            LayoutClass::Mobile => Viewport::new(390, 844),
            LayoutClass::Portrait => Viewport::new(1024, 1366),
            LayoutClass::Landscape => Viewport::default(),
        }
    }
}

impl fmt::Display for LayoutClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutClass {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mobile" => Ok(LayoutClass::Mobile),
            "portrait" => Ok(LayoutClass::Portrait),
            "landscape" => Ok(LayoutClass::Landscape),
            other => Err(UnknownValue {
                kind: "layout",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_are_mobile_regardless_of_height() {
        assert_eq!(Viewport::new(767, 2000).layout(), LayoutClass::Mobile);
        assert_eq!(Viewport::new(390, 844).layout().orientation(), Orientation::Landscape);
    }

    #[test]
    fn breakpoint_and_aspect_pick_desktop_layout() {
        assert_eq!(Viewport::new(768, 1024).layout(), LayoutClass::Portrait);
        assert_eq!(Viewport::new(1024, 1024).layout(), LayoutClass::Landscape);
        assert_eq!(Viewport::new(1920, 1080).layout(), LayoutClass::Landscape);
    }

    #[test]
    fn nominal_viewports_classify_as_their_layout() {
        for layout in [LayoutClass::Mobile, LayoutClass::Portrait, LayoutClass::Landscape] {
            assert_eq!(layout.nominal_viewport().layout(), layout);
            assert_eq!(layout.as_str().parse::<LayoutClass>(), Ok(layout));
        }
        assert!("tablet".parse::<LayoutClass>().is_err());
    }
}
