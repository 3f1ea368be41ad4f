//! Guide link list components

use maud::{Markup, html};

/// Renders a single guide link as a list item
///
/// # Arguments
///
/// * `href`: Link target, already prefixed for the current page depth
/// * `title`: Guide title shown as link text
///
/// # Returns
///
/// List item markup with an anchor to the guide page
pub fn list_link(href: &str, title: &str) -> Markup {
    html! {
        li class="list-link" {
            a href=(href) class="list-link-anchor" {
                i class="ph ph-caret-right" {}
                span class="list-link-title" { (title) }
            }
        }
    }
}

/// Wraps list links in the two column guide list
///
/// Collapses to a single column on narrow viewports via `guide-list` CSS.
pub fn link_list(items: Markup) -> Markup {
    html! {
        ul class="guide-list" {
            (items)
        }
    }
}
