//! Page behaviour independent of any renderer: layout classification, the
//! intro and activation state machine, tile placement, section paging, the
//! phone layout and the contact form client.

pub mod contact_form;
pub mod intro;
pub mod layout;
pub mod mobile;
pub mod paging;
pub mod panel;
pub mod state;
pub mod tile;
pub mod timeline;
pub mod viewport;

pub use intro::{IntroStage, IntroTimings};
pub use state::{update, Msg, Scene, TransitionRejected, UiAction, UiState};
pub use timeline::Timeline;
pub use viewport::{LayoutClass, Viewport};
