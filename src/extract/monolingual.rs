//! Monolingual (Japanese) dictionary pages.

use scraper::Selector;
use std::sync::OnceLock;
use tracing::debug;

use super::{compile, non_empty};
use crate::document::Document;
use crate::models::MonolingualEntry;

/// Heading of the first dictionary entry
pub const HEADING: &str = ".NetDicHead .midashigo";
/// Pronunciation and other inline annotations directly inside the heading
pub const HEADING_ANNOTATION: &str = "span";
/// Definition blocks under the entry body
pub const DEFINITIONS: &str = "#cont .kiji .NetDicBody > div > div > div > div";
/// Title of the Wikipedia block; the excerpt is its next sibling element
pub const WIKI_MARKER: &str = ".kiji .Wkpja .WkpjaTs";

struct Selectors {
    heading: Selector,
    heading_annotation: Selector,
    definitions: Selector,
    wiki_marker: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| Selectors {
        heading: compile(HEADING),
        heading_annotation: compile(HEADING_ANNOTATION),
        definitions: compile(DEFINITIONS),
        wiki_marker: compile(WIKI_MARKER),
    })
}

/// Extract a [`MonolingualEntry`] from a parsed page.
///
/// `word` stands in for the heading when the page has none.
pub fn extract(doc: &Document, word: &str) -> MonolingualEntry {
    let s = selectors();

    let headword = doc
        .select_first(&s.heading)
        .and_then(|node| non_empty(&node.text_without_children(&s.heading_annotation)))
        .unwrap_or_else(|| {
            debug!(word, "No heading on page, falling back to the query word");
            word.to_string()
        });

    let definitions: Vec<String> = doc
        .select_all(&s.definitions)
        .filter_map(|node| non_empty(&node.text()))
        .collect();

    let wiki_excerpt = doc
        .select_first(&s.wiki_marker)
        .and_then(|marker| marker.next_element_sibling())
        .and_then(|node| non_empty(&node.text()));

    debug!(
        headword = %headword,
        definitions = definitions.len(),
        wiki = wiki_excerpt.is_some(),
        "Extracted monolingual entry"
    );

    MonolingualEntry {
        headword,
        definitions,
        wiki_excerpt,
    }
}
