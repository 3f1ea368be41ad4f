//! Grouping of documentation nodes into titled sections.

use crate::content::{DocNode, Frontmatter};

/// Title of the section promoted by the hero banner instead of a card.
pub const GETTING_STARTED: &str = "Getting Started";

/// A single documentation page as listed on the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub id: String,
    pub path: String,
    pub frontmatter: Frontmatter,
}

impl Guide {
    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    pub fn is_hidden(&self) -> bool {
        self.frontmatter.hidden
    }
}

impl From<&DocNode> for Guide {
    fn from(node: &DocNode) -> Self {
        Self {
            id: node.id.clone(),
            path: node.page_path(),
            frontmatter: node.frontmatter.clone(),
        }
    }
}

/// A named category of guides.
///
/// `guides` keeps hidden entries; display code filters through
/// [`visible_guides`].
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub guides: Vec<Guide>,
}

impl Section {
    pub fn new(title: impl Into<String>, guides: Vec<Guide>) -> Self {
        Self {
            title: title.into(),
            guides,
        }
    }

    /// Whether this section is the one promoted by the hero banner.
    pub fn is_getting_started(&self) -> bool {
        self.title == GETTING_STARTED
    }
}

/// Groups documentation nodes by their frontmatter section.
///
/// Sections appear in the order their first node appears, and guides keep
/// node order within a section. Since nodes arrive sorted by priority, both
/// orders follow priority. Hidden nodes are kept.
pub fn sections_from_docs(nodes: &[DocNode]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for node in nodes {
        let name = &node.frontmatter.section;
        match sections.iter_mut().find(|s| &s.title == name) {
            Some(section) => section.guides.push(Guide::from(node)),
            None => sections.push(Section::new(name.clone(), vec![Guide::from(node)])),
        }
    }

    sections
}

/// Guides of a section that may be shown in listings.
///
/// The only visibility filter in the crate: the landing cards, the footer,
/// and the guide page writer all go through it.
pub fn visible_guides(section: &Section) -> impl Iterator<Item = &Guide> {
    section.guides.iter().filter(|g| !g.is_hidden())
}

/// Whether a section has at least one visible guide.
pub fn has_visible_guides(section: &Section) -> bool {
    visible_guides(section).next().is_some()
}
