//! Bilingual (Japanese-English) dictionary pages.

use scraper::Selector;
use std::sync::OnceLock;
use tracing::{debug, trace};

use super::{compile, non_empty};
use crate::document::{Document, Node};
use crate::models::{BilingualEntry, ExamplePair};

/// Query heading
pub const QUERY: &str = "#h1Query";
/// Summary translation cell
pub const SUMMARY: &str = ".summaryM table tbody tr td.content-explanation";
/// One example sentence block
pub const EXAMPLE: &str = ".qotC";
/// Example sentence
pub const EXAMPLE_HEAD: &str = ".qotCE";
/// Translation of [`EXAMPLE_HEAD`]
pub const EXAMPLE_TAIL: &str = ".qotCJ";
/// Example sentence in the alternate script
pub const ALT_EXAMPLE_HEAD: &str = ".qotCJE";
/// Translation of [`ALT_EXAMPLE_HEAD`]
pub const ALT_EXAMPLE_TAIL: &str = ".qotCJJ";
/// Inline annotations directly inside example sentences
pub const EXAMPLE_ANNOTATION: &str = "span";
/// Link to the full example list
pub const MORE_LINK: &str = ".hlt_SNTCE .kiji > a";
pub const MORE_LINK_ATTR: &str = "href";

struct Selectors {
    query: Selector,
    summary: Selector,
    example: Selector,
    head: Selector,
    tail: Selector,
    alt_head: Selector,
    alt_tail: Selector,
    annotation: Selector,
    more_link: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| Selectors {
        query: compile(QUERY),
        summary: compile(SUMMARY),
        example: compile(EXAMPLE),
        head: compile(EXAMPLE_HEAD),
        tail: compile(EXAMPLE_TAIL),
        alt_head: compile(ALT_EXAMPLE_HEAD),
        alt_tail: compile(ALT_EXAMPLE_TAIL),
        annotation: compile(EXAMPLE_ANNOTATION),
        more_link: compile(MORE_LINK),
    })
}

/// Extract a [`BilingualEntry`] from a parsed page.
///
/// `word` stands in for the query heading when the page has none.
pub fn extract(doc: &Document, word: &str) -> BilingualEntry {
    let s = selectors();

    let query = doc
        .select_first(&s.query)
        .and_then(|node| non_empty(&node.text()))
        .unwrap_or_else(|| {
            debug!(word, "No query heading on page, falling back to the query word");
            word.to_string()
        });

    let summary = doc
        .select_first(&s.summary)
        .map(|node| node.text().trim().to_string())
        .unwrap_or_default();

    let examples: Vec<ExamplePair> = doc
        .select_all(&s.example)
        .filter_map(|block| example_pair(block, s))
        .collect();

    let more_link = doc
        .select_first(&s.more_link)
        .and_then(|node| node.attr(MORE_LINK_ATTR))
        .and_then(non_empty);

    debug!(
        query = %query,
        examples = examples.len(),
        more_link = more_link.is_some(),
        "Extracted bilingual entry"
    );

    BilingualEntry {
        query,
        summary,
        examples,
        more_link,
    }
}

/// Read one example block, preferring the primary pair over the alternate one.
fn example_pair(block: Node<'_>, s: &'static Selectors) -> Option<ExamplePair> {
    let stripped = |selector: &'static Selector| {
        block
            .select_first(selector)
            .map(|node| node.text_without_children(&s.annotation).trim().to_string())
            .unwrap_or_default()
    };

    let head = stripped(&s.head);
    let (head, tail) = if head.is_empty() {
        trace!("Empty example head, trying the alternate pair");
        (stripped(&s.alt_head), stripped(&s.alt_tail))
    } else {
        let tail = block
            .select_first(&s.tail)
            .map(|node| node.text().trim().to_string())
            .unwrap_or_default();
        (head, tail)
    };

    if head.is_empty() {
        None
    } else {
        Some(ExamplePair { head, tail })
    }
}
