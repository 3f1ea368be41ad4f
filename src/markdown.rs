//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and rewriting of links
//! between documentation pages to their generated HTML pages.

mod links;
mod renderer;

pub use links::LinkResolver;
pub use renderer::MarkdownRenderer;
