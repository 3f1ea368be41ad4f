//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::{FooterProps, footer};
use crate::scroll::{ExecutionContext, scroll_effect};
use crate::sections::Section;

/// Shared page chrome passed to [`page_wrapper`].
pub struct PageChrome<'a> {
    /// Page title text (without suffix)
    pub title: &'a str,
    /// Site name appended to the title
    pub site_name: &'a str,
    /// Stylesheet file names under `assets/`
    pub stylesheets: &'a [&'a str],
    /// Relative prefix from the page to the site root
    pub prefix: &'a str,
    /// Sections handed to the footer unfiltered
    pub sections: &'a [Section],
    pub context: ExecutionContext,
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and footer structure across all
/// page types. The wrapper handles viewport configuration, charset,
/// stylesheet loading and the scroll effect while the caller provides page
/// specific body content. Remote scripts are only emitted for browser pages.
///
/// # Arguments
///
/// * `chrome`: Shared page settings
/// * `body`: Page specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(chrome: PageChrome<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (chrome.title) " - " (chrome.site_name) }
                @if chrome.context.has_document() {
                    script src="https://unpkg.com/@phosphor-icons/web" {}
                }
                @for stylesheet in chrome.stylesheets {
                    link rel="stylesheet" href=(format!("{}assets/{}", chrome.prefix, stylesheet));
                }
                (scroll_effect(chrome.context, chrome.prefix))
            }
            body {
                div class="page-root" {
                    (body)
                }
                div class="footer-background" {}
                (footer(FooterProps {
                    sections: chrome.sections,
                    right: 0,
                    prefix: chrome.prefix,
                }))
            }
        }
    }
}
