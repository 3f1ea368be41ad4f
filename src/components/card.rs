//! Section card components for the landing grid

use maud::{Markup, html};

use super::list_link::{link_list, list_link};
use crate::sections::Guide;

/// Renders a section card with heading, subtitle and guide links
///
/// # Arguments
///
/// * `title`: Section title used as card heading
/// * `subtitle`: Subtitle text (may be empty, the element is still emitted)
/// * `guides`: Visible guides in display order
///
/// # Returns
///
/// Grid cell markup containing the card
pub fn section_card(title: &str, subtitle: &str, guides: &[&Guide]) -> Markup {
    html! {
        div class="grid-item grid-item-card" {
            article class="paper-card" {
                h2 class="card-heading" { (title) }
                p class="card-subheading" { (subtitle) }
                (link_list(html! {
                    @for guide in guides {
                        (list_link(&guide.path, guide.title()))
                    }
                }))
            }
        }
    }
}

/// Renders an empty full width grid cell
///
/// Reserves a row in the grid for a section promoted elsewhere on the page.
pub fn placeholder_slot() -> Markup {
    html! {
        div class="grid-item grid-item-full" {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Frontmatter;

    fn guide(id: &str, title: &str) -> Guide {
        Guide {
            id: id.to_string(),
            path: format!("docs/{}.html", id),
            frontmatter: Frontmatter {
                title: title.to_string(),
                section: "Guides".to_string(),
                hidden: false,
                priority: None,
            },
        }
    }

    #[test]
    fn test_section_card_contents() {
        // Arrange
        let auth = guide("auth", "Auth");
        let carts = guide("carts", "Carts");

        // Act
        let html = section_card("Guides", "Hands-on", &[&auth, &carts]).into_string();

        // Assert
        assert!(html.contains("<h2 class=\"card-heading\">Guides</h2>"));
        assert!(html.contains("<p class=\"card-subheading\">Hands-on</p>"));
        let auth_pos = html.find("docs/auth.html").expect("Auth link");
        let carts_pos = html.find("docs/carts.html").expect("Carts link");
        assert!(auth_pos < carts_pos, "Links keep input order");
    }

    #[test]
    fn test_placeholder_has_no_card() {
        let html = placeholder_slot().into_string();
        assert!(!html.contains("paper-card"));
        assert!(html.contains("grid-item-full"));
    }
}
