//! Article Markup - Plain paragraphs plus a line-prefix heading marker
//!
//! Article bodies use a deliberately minimal format: one block per line,
//! where a line starting with `"## "` is a heading (marker stripped) and
//! any other non-blank line is a paragraph. Blank lines separate blocks
//! and produce nothing.
//!
//! This is the full extent of formatting the content uses. It is not a
//! markdown implementation and must not grow into one.

// =============================================================================
// BLOCKS
// =============================================================================

/// Heading marker prefix.
const HEADING_PREFIX: &str = "## ";

/// One rendered block of an article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Heading(&'a str),
    Paragraph(&'a str),
}

/// Split an article body into blocks, in order.
pub fn parse(body: &str) -> Vec<Block<'_>> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix(HEADING_PREFIX) {
            Some(heading) => Block::Heading(heading),
            None => Block::Paragraph(line),
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
