//! ANSI colour styling for terminals.

use owo_colors::{OwoColorize, Style};

use super::{Role, TextDecorator};

/// Colours decorated lines with ANSI escape codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ansi;

impl Ansi {
    fn style_for(role: Role) -> Style {
        match role {
            Role::Headword => Style::new().bold().yellow(),
            Role::Query => Style::new().bold().green(),
            Role::SectionLabel => Style::new().bold(),
            Role::ExampleHead => Style::new().yellow(),
            Role::Link => Style::new().underline(),
        }
    }
}

impl TextDecorator for Ansi {
    fn decorate(&self, role: Role, text: &str) -> String {
        text.style(Self::style_for(role)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_text_in_escape_codes() {
        let styled = Ansi.decorate(Role::Headword, "Head");
        assert!(styled.starts_with('\u{1b}'));
        assert!(styled.contains("Head"));
        assert_ne!(styled, "Head");
    }

    #[test]
    fn test_roles_are_distinguishable() {
        assert_ne!(
            Ansi.decorate(Role::Headword, "x"),
            Ansi.decorate(Role::Query, "x")
        );
        assert_ne!(
            Ansi.decorate(Role::ExampleHead, "x"),
            Ansi.decorate(Role::Link, "x")
        );
    }
}
