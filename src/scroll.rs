//! Smooth scrolling for in-page anchors.
//!
//! The generated pages attach smooth scrolling to every `a[href*="#"]` once,
//! after the document loads. Whether the effect is emitted at all depends on
//! the [`ExecutionContext`] the page is rendered for.

use maud::{Markup, html};

/// Selector of anchors that receive smooth scrolling.
pub const ANCHOR_SELECTOR: &str = r##"a[href*="#"]"##;

/// File name of the bundled scroll script under `assets/`.
pub const SCRIPT_FILE: &str = "smooth-scroll.js";

/// Environment a page is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionContext {
    /// Page is opened in a browser with a document and window
    #[default]
    Browser,
    /// Page is consumed without a browser (snapshots, feeds, link checkers)
    Headless,
}

impl ExecutionContext {
    pub fn has_document(self) -> bool {
        matches!(self, Self::Browser)
    }
}

/// Renders the one-time scroll effect for a page.
///
/// Emits a deferred script tag pointing at the bundled script when the
/// context has a document, and nothing otherwise. The script itself guards
/// against attaching twice per load.
///
/// # Arguments
///
/// * `context`: Execution context of the page
/// * `asset_prefix`: Relative prefix to the site root (`""` or `"../"` etc)
pub fn scroll_effect(context: ExecutionContext, asset_prefix: &str) -> Markup {
    html! {
        @if context.has_document() {
            script src=(format!("{}assets/{}", asset_prefix, SCRIPT_FILE)) defer {}
        }
    }
}
