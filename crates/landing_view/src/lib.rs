//! Server-side rendering of the landing page with Leptos.
//!
//! Every render is a pure function of a [`PageSnapshot`]: the UI state, the
//! locale, the requested section page and the contact form. No reactive
//! runtime or hydration is involved; links stand in for click handlers.
//!
//! ```rust,ignore
//! use landing_view::{render_page, PageSnapshot};
//!
//! let html = render_page(&PageSnapshot::new(state, i18n));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod components;
pub mod links;
pub mod snapshot;
pub mod styles;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

use components::LandingDocument;
pub use snapshot::{OpenPanel, PageSnapshot};

/// A complete HTML document, including `<!DOCTYPE html>`.
pub fn render_page(snapshot: &PageSnapshot) -> String {
    let doc = view! { <LandingDocument snapshot=snapshot.clone() /> };
    let html = doc.to_html();
    debug!(
        layout = %snapshot.state.layout,
        stage = %snapshot.state.stage(),
        locale = %snapshot.i18n.locale(),
        bytes = html.len(),
        "page rendered"
    );
    format!("<!DOCTYPE html>\n{html}")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
