//! Hero banner component

use maud::{Markup, html};

use super::list_link::list_link;
use crate::sections::Guide;

/// Anchor id of the section card grid the hero links down to.
pub const GRID_ANCHOR: &str = "guides";

/// Renders the hero banner at the top of the landing page
///
/// Takes site level text plus the visible guides of the promoted section,
/// which get no card of their own. The first of them becomes the "Get
/// started" call to action, and all of them are listed under it. The browse
/// link is an in-page anchor, so it picks up smooth scrolling when the page
/// runs in a browser.
///
/// # Arguments
///
/// * `site_name`: Site name used as banner heading
/// * `tagline`: Optional line under the heading
/// * `getting_started`: Visible guides of the promoted section, in order
///
/// # Returns
///
/// Hero banner markup
pub fn jumbotron(site_name: &str, tagline: Option<&str>, getting_started: &[&Guide]) -> Markup {
    html! {
        section class="jumbotron" {
            div class="jumbotron-inner" {
                h1 class="jumbotron-title" { (site_name) }
                @if let Some(text) = tagline {
                    p class="jumbotron-tagline" { (text) }
                }
                div class="jumbotron-actions" {
                    @if let Some(first) = getting_started.first() {
                        a class="jumbotron-cta jumbotron-cta-primary" href=(first.path) {
                            "Get started "
                            i class="ph ph-arrow-right" {}
                        }
                    }
                    a class="jumbotron-cta" href=(format!("#{}", GRID_ANCHOR)) {
                        "Browse the docs "
                        i class="ph ph-arrow-down" {}
                    }
                }
                @if !getting_started.is_empty() {
                    ul class="jumbotron-guides" {
                        @for guide in getting_started {
                            (list_link(&guide.path, guide.title()))
                        }
                    }
                }
            }
        }
    }
}
