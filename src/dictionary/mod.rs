//! The lookup pipeline: fetch the page, extract a record, render it.

use std::io::{self, Write};
use tracing::info;

use crate::config::Config;
use crate::document::Document;
use crate::extract::{bilingual, monolingual};
use crate::fetch::{fetch, FetchError};
use crate::models::DictionaryRecord;
use crate::render::{render, TextDecorator};
use crate::utils::HttpClient;

/// Which Weblio dictionary to consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dictionary {
    /// Japanese dictionary (weblio.jp)
    Monolingual,
    /// Japanese-English dictionary (ejje.weblio.jp)
    Bilingual,
}

impl Dictionary {
    /// Returns the display name of the dictionary
    pub fn name(&self) -> &'static str {
        match self {
            Dictionary::Monolingual => "Weblio",
            Dictionary::Bilingual => "Weblio Eiji",
        }
    }

    /// Base URL the word is appended to
    pub fn base_url<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Dictionary::Monolingual => &config.monolingual_base_url,
            Dictionary::Bilingual => &config.bilingual_base_url,
        }
    }

    /// Run this dictionary's extractor over a fetched page
    pub fn extract(&self, doc: &Document, word: &str) -> DictionaryRecord {
        match self {
            Dictionary::Monolingual => monolingual::extract(doc, word).into(),
            Dictionary::Bilingual => bilingual::extract(doc, word).into(),
        }
    }
}

impl std::fmt::Display for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors from a full lookup
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The output sink could not be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Fetches and extracts dictionary entries with a shared client
#[derive(Debug, Clone)]
pub struct Lookup {
    client: HttpClient,
    config: Config,
}

impl Lookup {
    /// Create a lookup with a fresh client built from `config`
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let client = HttpClient::new(&config)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a lookup reusing an existing client
    pub fn with_client(client: HttpClient, config: Config) -> Self {
        Self { client, config }
    }

    /// Fetch the page for `word` and extract its record.
    pub async fn record(
        &self,
        dictionary: Dictionary,
        word: &str,
    ) -> Result<DictionaryRecord, FetchError> {
        info!(%dictionary, word, "Looking up word");
        let doc = fetch(
            &self.client,
            dictionary.base_url(&self.config),
            word,
            self.config.timeout,
        )
        .await?;

        let record = dictionary.extract(&doc, word);
        info!(title = record.title(), "Extracted entry");
        Ok(record)
    }

    /// Look up `word` and render the entry to `sink`.
    ///
    /// Nothing is written when the fetch fails.
    pub async fn run<D, W>(
        &self,
        dictionary: Dictionary,
        word: &str,
        decorator: &D,
        sink: &mut W,
    ) -> Result<(), LookupError>
    where
        D: TextDecorator + ?Sized,
        W: Write + ?Sized,
    {
        let record = self.record(dictionary, word).await?;
        render(&record, decorator, sink)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_per_dictionary() {
        let config = Config::default()
            .monolingual_base_url("http://mono/")
            .bilingual_base_url("http://bi/");

        assert_eq!(Dictionary::Monolingual.base_url(&config), "http://mono/");
        assert_eq!(Dictionary::Bilingual.base_url(&config), "http://bi/");
    }

    #[test]
    fn test_extract_dispatches_by_variant() {
        let doc = Document::parse("<html><body></body></html>");

        assert!(matches!(
            Dictionary::Monolingual.extract(&doc, "w"),
            DictionaryRecord::Monolingual(_)
        ));
        assert!(matches!(
            Dictionary::Bilingual.extract(&doc, "w"),
            DictionaryRecord::Bilingual(_)
        ));
    }

    #[test]
    fn test_record_with_malformed_base_fails_without_request() {
        let config = Config::default().bilingual_base_url("::bad");
        let lookup = Lookup::new(config).unwrap();

        let err = tokio_test::block_on(lookup.record(Dictionary::Bilingual, "w")).unwrap_err();
        assert!(matches!(err, FetchError::RequestBuild(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Dictionary::Bilingual.to_string(), "Weblio Eiji");
    }
}
