//! Static landing site generator for documentation content.

mod assets;
pub mod components;
mod config;
mod content;
mod markdown;
pub mod pages;
mod path;
pub mod scroll;
mod sections;
mod site;
mod subtitle;

pub use assets::write_assets;
pub use config::Config;
pub use content::{DocNode, Frontmatter, load_docs, page_path_for, split_frontmatter};
pub use markdown::{LinkResolver, MarkdownRenderer};
pub use pages::landing::{LandingPageData, SectionSlot, plan_slots};
pub use scroll::ExecutionContext;
pub use sections::{
    GETTING_STARTED, Guide, Section, has_visible_guides, sections_from_docs, visible_guides,
};
pub use site::{BuildReport, build};
pub use subtitle::subtitle_for;
