//! Guide page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::collections::HashSet;

use crate::components::layout::{PageChrome, page_wrapper};
use crate::components::nav::breadcrumb;
use crate::content::DocNode;
use crate::markdown::{LinkResolver, MarkdownRenderer};
use crate::path::{calculate_depth, root_prefix};
use crate::scroll::ExecutionContext;
use crate::sections::Section;

/// Stylesheets loaded by guide pages
const STYLESHEETS: &[&str] = &["guide.css", "markdown.css"];

/// Data container for guide page generation
pub struct GuidePageData<'a> {
    pub site_name: &'a str,
    pub node: &'a DocNode,
    /// All sections, handed to the footer
    pub sections: &'a [Section],
    /// Site relative paths of every guide page the build writes
    pub published: &'a HashSet<String>,
    pub context: ExecutionContext,
}

/// Generates a guide page with its rendered markdown body
///
/// Relative links to other doc files are rewritten to their generated pages
/// as seen from this page's depth. Links to doc files without a published
/// page are left as written.
///
/// # Errors
///
/// Returns error if markdown rendering fails
pub fn generate(data: GuidePageData<'_>) -> Result<Markup> {
    let page_path = data.node.page_path();
    let prefix = root_prefix(&page_path);

    let renderer = MarkdownRenderer::with_link_resolver(LinkResolver::new(
        &data.node.relative_path,
        calculate_depth(&page_path),
        data.published,
    ));
    let body = renderer
        .render(&data.node.body)
        .with_context(|| format!("Failed to render markdown for {}", data.node.id))?;

    let frontmatter = &data.node.frontmatter;

    Ok(page_wrapper(
        PageChrome {
            title: &frontmatter.title,
            site_name: data.site_name,
            stylesheets: STYLESHEETS,
            prefix: &prefix,
            sections: data.sections,
            context: data.context,
        },
        html! {
            main class="guide-container" {
                (breadcrumb(&format!("{}index.html", prefix), &frontmatter.section, &frontmatter.title))
                article class="guide-card" {
                    h1 class="guide-title" { (frontmatter.title) }
                    div class="markdown-body" {
                        (PreEscaped(body))
                    }
                }
            }
        },
    ))
}
