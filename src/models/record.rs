//! Records produced by the extractors.

use serde::Serialize;

/// Entry from the monolingual dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonolingualEntry {
    /// Heading of the page, or the looked-up word when the page has none
    pub headword: String,

    /// Non-empty, trimmed definition blocks in document order
    pub definitions: Vec<String>,

    /// Wikipedia excerpt, when the page carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_excerpt: Option<String>,
}

/// One example sentence and its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamplePair {
    pub head: String,
    pub tail: String,
}

impl ExamplePair {
    pub fn new(head: impl Into<String>, tail: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            tail: tail.into(),
        }
    }
}

/// Entry from the bilingual dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BilingualEntry {
    /// Query heading of the page, or the looked-up word when the page has none
    pub query: String,

    /// Summary translation; may be empty
    pub summary: String,

    /// Example pairs whose head is non-empty
    pub examples: Vec<ExamplePair>,

    /// Link to more examples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_link: Option<String>,
}

/// A structured dictionary entry, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DictionaryRecord {
    Monolingual(MonolingualEntry),
    Bilingual(BilingualEntry),
}

impl DictionaryRecord {
    /// The heading line of the record (headword or query)
    pub fn title(&self) -> &str {
        match self {
            DictionaryRecord::Monolingual(entry) => &entry.headword,
            DictionaryRecord::Bilingual(entry) => &entry.query,
        }
    }
}

impl From<MonolingualEntry> for DictionaryRecord {
    fn from(entry: MonolingualEntry) -> Self {
        DictionaryRecord::Monolingual(entry)
    }
}

impl From<BilingualEntry> for DictionaryRecord {
    fn from(entry: BilingualEntry) -> Self {
        DictionaryRecord::Bilingual(entry)
    }
}
