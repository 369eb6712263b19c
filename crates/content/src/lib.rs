pub mod catalog;
pub mod i18n;
pub mod sections;

pub use catalog::{GridItem, Icon, VisionItem, GRID_ITEMS, VISION_ITEMS};
pub use i18n::{I18n, I18nError, Translation, Translations};
pub use sections::{Section, SectionContent};
