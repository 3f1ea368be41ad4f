//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options, format_html, parse_document};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

use super::LinkResolver;

/// Renders documentation markdown to HTML.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists and footnotes. Fenced code blocks with a known language are
/// highlighted by syntect using CSS classes. Optionally rewrites links to
/// other doc files when configured with a [`LinkResolver`].
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    link_resolver: Option<LinkResolver<'a>>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Raw HTML is passed through, since doc sources routinely embed it.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.header_ids = Some(String::new());

        options.parse.smart = true;
        options.render.unsafe_ = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            link_resolver: None,
        }
    }

    /// Creates renderer that rewrites links between doc files.
    ///
    /// # Arguments
    ///
    /// * `resolver`: Resolver for the doc file being rendered
    pub fn with_link_resolver(resolver: LinkResolver<'a>) -> Self {
        let mut renderer = Self::new();
        renderer.link_resolver = Some(resolver);
        renderer
    }

    /// Renders markdown content to HTML string.
    ///
    /// Parses markdown into an AST, rewrites doc links and highlights code
    /// blocks in place, then formats the tree as HTML.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting or HTML formatting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        for node in root.descendants() {
            self.transform_node(node)?;
        }

        let mut html = Vec::new();
        format_html(root, &self.options, &mut html).context("Failed to format markdown HTML")?;
        String::from_utf8(html).context("Rendered markdown is not valid UTF8")
    }

    fn transform_node<'n>(&self, node: &'n AstNode<'n>) -> Result<()> {
        let mut data = node.data.borrow_mut();

        let replacement = match &mut data.value {
            NodeValue::Link(link) => {
                if let Some(resolver) = &self.link_resolver {
                    match resolver.resolve(&link.url) {
                        Ok(url) => link.url = url,
                        Err(e) => debug!("Leaving link {} unresolved: {:#}", link.url, e),
                    }
                }
                None
            }
            NodeValue::CodeBlock(block) if block.fenced => {
                let language = block.info.split_whitespace().next().unwrap_or("");
                self.highlight_code(&block.literal, language)?
                    .map(|highlighted| {
                        format!(
                            "<pre><code class=\"language-{}\">{}</code></pre>\n",
                            language, highlighted
                        )
                    })
            }
            _ => None,
        };

        if let Some(literal) = replacement {
            data.value = NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 0,
                literal,
            });
        }

        Ok(())
    }

    /// Highlights code with syntect using `hljs-` prefixed CSS classes.
    ///
    /// Returns `None` for empty code or an unknown language, leaving the
    /// block to comrak's plain rendering.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    fn highlight_code(&self, code: &str, language: &str) -> Result<Option<String>> {
        if code.is_empty() || language.is_empty() {
            return Ok(None);
        }

        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            return Ok(None);
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(Some(generator.finalize()))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
