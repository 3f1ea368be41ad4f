//! Documentation landing page generation

use maud::{Markup, html};

use crate::components::card::{placeholder_slot, section_card};
use crate::components::jumbotron::{GRID_ANCHOR, jumbotron};
use crate::components::layout::{PageChrome, page_wrapper};
use crate::scroll::ExecutionContext;
use crate::sections::{Guide, Section, visible_guides};
use crate::subtitle::subtitle_for;

/// Stylesheets loaded by the landing page
const STYLESHEETS: &[&str] = &["landing.css"];

/// Data container for landing page generation
pub struct LandingPageData<'a> {
    pub site_name: &'a str,
    pub tagline: Option<&'a str>,
    pub sections: &'a [Section],
    pub context: ExecutionContext,
}

/// What a section occupies in the landing grid
#[derive(Debug, PartialEq)]
pub enum SectionSlot<'a> {
    /// Full width empty cell for the section promoted by the hero banner
    Placeholder,
    /// Section has no visible guides and renders nothing
    Empty,
    Card {
        title: &'a str,
        subtitle: &'static str,
        guides: Vec<&'a Guide>,
    },
}

/// Decides the grid slot for every section, in input order
///
/// "Getting Started" always becomes a placeholder. Any other section becomes
/// a card holding its visible guides, or nothing when none are visible. The
/// card decision and the listed links come from the same filtered list.
pub fn plan_slots(sections: &[Section]) -> Vec<SectionSlot<'_>> {
    sections.iter().map(plan_slot).collect()
}

fn plan_slot(section: &Section) -> SectionSlot<'_> {
    if section.is_getting_started() {
        return SectionSlot::Placeholder;
    }

    let guides: Vec<&Guide> = visible_guides(section).collect();
    if guides.is_empty() {
        return SectionSlot::Empty;
    }

    SectionSlot::Card {
        title: &section.title,
        subtitle: subtitle_for(&section.title),
        guides,
    }
}

fn render_slot(slot: &SectionSlot<'_>) -> Markup {
    match slot {
        SectionSlot::Placeholder => placeholder_slot(),
        SectionSlot::Empty => html! {},
        SectionSlot::Card {
            title,
            subtitle,
            guides,
        } => section_card(title, subtitle, guides),
    }
}

/// Visible guides of the section promoted by the hero banner
fn promoted_guides(sections: &[Section]) -> Vec<&Guide> {
    sections
        .iter()
        .filter(|section| section.is_getting_started())
        .flat_map(visible_guides)
        .collect()
}

/// Generates the landing page HTML
///
/// Renders the hero banner with the promoted section's guides, one grid slot
/// per section following [`plan_slots`], and the footer with the complete
/// section list.
///
/// # Arguments
///
/// * `data`: Landing page data container
///
/// # Returns
///
/// Complete HTML markup for the landing page
pub fn generate(data: LandingPageData<'_>) -> Markup {
    let slots = plan_slots(data.sections);
    let promoted = promoted_guides(data.sections);

    page_wrapper(
        PageChrome {
            title: "Home",
            site_name: data.site_name,
            stylesheets: STYLESHEETS,
            prefix: "",
            sections: data.sections,
            context: data.context,
        },
        html! {
            (jumbotron(data.site_name, data.tagline, &promoted))
            main class="landing-container" {
                div class="section-grid" id=(GRID_ANCHOR) {
                    @for slot in &slots {
                        (render_slot(slot))
                    }
                }
            }
        },
    )
}
