//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation for a guide page
///
/// Shows a home link back to the landing page, the guide's section as plain
/// text, and the guide title as the current location.
///
/// # Arguments
///
/// * `home_href`: Relative path back to the landing page
/// * `section`: Section the guide belongs to
/// * `title`: Guide title
///
/// # Returns
///
/// Breadcrumb navigation markup with separators
pub fn breadcrumb(home_href: &str, section: &str, title: &str) -> Markup {
    html! {
        nav class="breadcrumb" {
            a href=(home_href) class="breadcrumb-link" {
                i class="ph ph-house" {}
                " Home"
            }
            span class="breadcrumb-separator" { "/" }
            span class="breadcrumb-section" { (section) }
            span class="breadcrumb-separator" { "/" }
            span class="breadcrumb-current" { (title) }
        }
    }
}
