//! Rendering records as terminal lines.
//!
//! The line sequence depends only on the record. A [`TextDecorator`] may wrap
//! individual lines in styling markers but never adds, drops or reorders them.

mod ansi;

pub use ansi::Ansi;

use std::io::{self, Write};

use crate::models::{BilingualEntry, DictionaryRecord, MonolingualEntry};

/// Label printed above the example pairs
pub const EXAMPLES_LABEL: &str = "[Examples]";

/// What a decorated line is, so a decorator can pick a style for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Monolingual heading
    Headword,
    /// Bilingual query heading
    Query,
    /// Section label such as [`EXAMPLES_LABEL`]
    SectionLabel,
    /// Example sentence
    ExampleHead,
    /// More-examples link
    Link,
}

/// Content-preserving styling applied to decorated lines
pub trait TextDecorator {
    fn decorate(&self, role: Role, text: &str) -> String;
}

impl<F> TextDecorator for F
where
    F: Fn(Role, &str) -> String,
{
    fn decorate(&self, role: Role, text: &str) -> String {
        self(role, text)
    }
}

/// Identity decorator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl TextDecorator for Plain {
    fn decorate(&self, _role: Role, text: &str) -> String {
        text.to_string()
    }
}

/// The lines for `record`, in output order
pub fn render_lines<D>(record: &DictionaryRecord, decorator: &D) -> Vec<String>
where
    D: TextDecorator + ?Sized,
{
    match record {
        DictionaryRecord::Monolingual(entry) => monolingual_lines(entry, decorator),
        DictionaryRecord::Bilingual(entry) => bilingual_lines(entry, decorator),
    }
}

/// Write the lines for `record` to `sink`, one per line.
pub fn render<D, W>(record: &DictionaryRecord, decorator: &D, sink: &mut W) -> io::Result<()>
where
    D: TextDecorator + ?Sized,
    W: Write + ?Sized,
{
    for line in render_lines(record, decorator) {
        writeln!(sink, "{}", line)?;
    }
    sink.flush()
}

fn monolingual_lines<D>(entry: &MonolingualEntry, decorator: &D) -> Vec<String>
where
    D: TextDecorator + ?Sized,
{
    let mut lines = Vec::with_capacity(entry.definitions.len() + 2);
    lines.push(decorator.decorate(Role::Headword, &entry.headword));
    lines.extend(entry.definitions.iter().cloned());
    if let Some(excerpt) = &entry.wiki_excerpt {
        lines.push(excerpt.clone());
    }
    lines
}

fn bilingual_lines<D>(entry: &BilingualEntry, decorator: &D) -> Vec<String>
where
    D: TextDecorator + ?Sized,
{
    let mut lines = Vec::with_capacity(entry.examples.len() * 2 + 7);
    lines.push(decorator.decorate(Role::Query, &entry.query));
    lines.push(entry.summary.clone());
    lines.push(String::new());
    lines.push(decorator.decorate(Role::SectionLabel, EXAMPLES_LABEL));
    for pair in &entry.examples {
        lines.push(decorator.decorate(Role::ExampleHead, &pair.head));
        lines.push(pair.tail.clone());
    }
    // No trailing block at all when the page had no link.
    if let Some(link) = &entry.more_link {
        lines.push(String::new());
        lines.push(decorator.decorate(Role::Link, link));
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExamplePair;

    fn monolingual() -> DictionaryRecord {
        DictionaryRecord::from(MonolingualEntry {
            headword: "Head".to_string(),
            definitions: vec!["意味1".to_string(), "意味2".to_string()],
            wiki_excerpt: Some("Wiki text".to_string()),
        })
    }

    fn bilingual(more_link: Option<&str>) -> DictionaryRecord {
        DictionaryRecord::from(BilingualEntry {
            query: "Query".to_string(),
            summary: "Summary".to_string(),
            examples: vec![
                ExamplePair::new("head1", "tail1"),
                ExamplePair::new("alt-head", ""),
            ],
            more_link: more_link.map(str::to_string),
        })
    }

    /// Remove SGR escape sequences.
    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_monolingual_order() {
        let lines = render_lines(&monolingual(), &Plain);
        assert_eq!(lines, vec!["Head", "意味1", "意味2", "Wiki text"]);
    }

    #[test]
    fn test_monolingual_without_excerpt() {
        let record = DictionaryRecord::from(MonolingualEntry {
            headword: "test".to_string(),
            definitions: Vec::new(),
            wiki_excerpt: None,
        });
        assert_eq!(render_lines(&record, &Plain), vec!["test"]);
    }

    #[test]
    fn test_bilingual_order_with_link() {
        let lines = render_lines(&bilingual(Some("https://example.com/more")), &Plain);
        assert_eq!(
            lines,
            vec![
                "Query",
                "Summary",
                "",
                "[Examples]",
                "head1",
                "tail1",
                "alt-head",
                "",
                "",
                "https://example.com/more",
                "",
            ]
        );
    }

    #[test]
    fn test_bilingual_without_link_has_no_trailing_block() {
        let lines = render_lines(&bilingual(None), &Plain);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines.last().map(String::as_str), Some(""));
        assert_eq!(lines[6], "alt-head");
    }

    #[test]
    fn test_empty_summary_still_emits_line() {
        let record = DictionaryRecord::from(BilingualEntry {
            query: "q".to_string(),
            summary: String::new(),
            examples: Vec::new(),
            more_link: None,
        });
        assert_eq!(render_lines(&record, &Plain), vec!["q", "", "", "[Examples]"]);
    }

    #[test]
    fn test_decorator_only_touches_decorated_roles() {
        let tag = |role: Role, text: &str| format!("<{:?}>{}", role, text);
        let lines = render_lines(&bilingual(Some("link")), &tag);

        assert_eq!(lines[0], "<Query>Query");
        assert_eq!(lines[1], "Summary");
        assert_eq!(lines[3], "<SectionLabel>[Examples]");
        assert_eq!(lines[4], "<ExampleHead>head1");
        assert_eq!(lines[5], "tail1");
        assert_eq!(lines[9], "<Link>link");
    }

    #[test]
    fn test_decorator_invariance() {
        for record in [monolingual(), bilingual(Some("link")), bilingual(None)] {
            let plain = render_lines(&record, &Plain);
            let styled = render_lines(&record, &Ansi);

            assert_eq!(plain.len(), styled.len());
            let stripped: Vec<String> = styled.iter().map(|l| strip_ansi(l)).collect();
            assert_eq!(plain, stripped);
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let record = bilingual(Some("https://example.com/more"));
        let mut first = Vec::new();
        let mut second = Vec::new();

        render(&record, &Ansi, &mut first).unwrap();
        render(&record, &Ansi, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_writes_one_line_each() {
        let mut out = Vec::new();
        render(&monolingual(), &Plain, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Head\n意味1\n意味2\nWiki text\n"
        );
    }
}
