//! Site footer component

use maud::{Markup, html};

use crate::sections::{Section, has_visible_guides, visible_guides};

/// Input for [`footer`].
pub struct FooterProps<'a> {
    /// All sections, unfiltered
    pub sections: &'a [Section],
    /// Right offset of the footer in pixels
    pub right: u32,
    /// Relative prefix from the current page to the site root
    pub prefix: &'a str,
}

/// Renders the site footer with a link column per listed section
///
/// The footer decides on its own what to list: every section with at least
/// one visible guide, except the one promoted by the hero banner.
pub fn footer(props: FooterProps<'_>) -> Markup {
    html! {
        footer class="site-footer" style=(format!("right: {}px", props.right)) {
            div class="footer-columns" {
                @for section in props.sections {
                    @if !section.is_getting_started() && has_visible_guides(section) {
                        div class="footer-column" {
                            h4 class="footer-heading" { (section.title) }
                            ul class="footer-links" {
                                @for guide in visible_guides(section) {
                                    li {
                                        a href=(format!("{}{}", props.prefix, guide.path)) class="footer-link" {
                                            (guide.title())
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            p class="footer-credit" {
                "Generated by "
                span class="footer-brand" { "Guidebook" }
            }
        }
    }
}
