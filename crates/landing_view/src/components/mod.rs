//! Page components.

mod contact_form;
mod document;
mod grid;
mod icons;
mod language;
mod mobile;
mod overlay;
mod panel;
mod sections;
mod tile;
mod vision;

pub use contact_form::{status_key, ContactFormView};
pub use document::LandingDocument;
pub use grid::BentoGrid;
pub use icons::*;
pub use language::LanguageSwitcher;
pub use mobile::MobilePage;
pub use overlay::IntroOverlay;
pub use panel::DetailPanel;
pub use sections::SectionView;
pub use tile::{tile_style, Tile};
pub use vision::{CallToAction, VisionStrip};
