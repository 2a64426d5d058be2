use crate::flow::decode_code;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const KEYWORDS: &[&str] = &[
    "access", "all", "account", "as", "auth", "break", "case", "contract", "continue", "create",
    "default", "destroy", "else", "emit", "entitlement", "enum", "event", "execute", "false",
    "for", "fun", "if", "import", "in", "init", "let", "nil", "post", "pre", "prepare", "priv",
    "pub", "resource", "return", "self", "struct", "switch", "transaction", "true", "var",
    "view", "while",
];

/// Styled rendering of deployed code, recomputed only when the code bytes change.
#[derive(Debug, Default)]
pub struct CodeHighlighter {
    source: Option<Vec<u8>>,
    lines: Vec<Line<'static>>,
    passes: usize,
}

impl CodeHighlighter {
    pub fn highlight(&mut self, code: &[u8]) -> &[Line<'static>] {
        if self.source.as_deref() != Some(code) {
            self.lines = decode_code(code).lines().map(highlight_line).collect();
            self.source = Some(code.to_vec());
            self.passes += 1;
            tracing::trace!(passes = self.passes, lines = self.lines.len(), "highlighted code block");
        }
        &self.lines
    }

    /// Number of times highlighting actually ran.
    #[cfg(test)]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

fn keyword_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

fn highlight_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        if rest.starts_with("//") {
            spans.push(Span::styled(
                rest.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
            break;
        }

        let Some(first) = rest.chars().next() else {
            break;
        };

        let end = if first == '"' {
            string_end(rest)
        } else if first.is_alphabetic() || first == '_' {
            rest.find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len())
        } else if first.is_ascii_digit() {
            rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '.' || c == '_'))
                .unwrap_or(rest.len())
        } else {
            first.len_utf8()
        };

        let (token, tail) = rest.split_at(end);
        let style = if first == '"' {
            Style::default().fg(Color::Green)
        } else if first.is_ascii_digit() {
            Style::default().fg(Color::Yellow)
        } else if KEYWORDS.contains(&token) {
            keyword_style()
        } else if first.is_uppercase() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        push_token(&mut spans, token, style);
        rest = tail;
    }

    Line::from(spans)
}

fn string_end(text: &str) -> usize {
    let mut escaped = false;
    for (idx, c) in text.char_indices().skip(1) {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return idx + 1,
            _ => escaped = false,
        }
    }
    text.len()
}

// Adjacent tokens with the same style share a span.
fn push_token(spans: &mut Vec<Span<'static>>, token: &str, style: Style) {
    if let Some(last) = spans.last_mut() {
        if last.style == style {
            let mut merged = last.content.to_string();
            merged.push_str(token);
            last.content = merged.into();
            return;
        }
    }
    spans.push(Span::styled(token.to_string(), style));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn highlighting_preserves_text() {
        let source = "pub fun main(): String {\n  return \"hi \\\" there\" // done\n}";
        let mut highlighter = CodeHighlighter::default();
        let lines = highlighter.highlight(source.as_bytes());
        let rendered: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(rendered, source.lines().collect::<Vec<_>>());
    }

    #[test]
    fn keywords_strings_and_comments_are_styled() {
        let line = highlight_line("let x = \"s\" // c");
        let keyword = line.spans.iter().find(|s| s.content == "let").unwrap();
        assert_eq!(keyword.style, keyword_style());
        let string = line.spans.iter().find(|s| s.content == "\"s\"").unwrap();
        assert_eq!(string.style.fg, Some(Color::Green));
        let comment = line.spans.last().unwrap();
        assert_eq!(comment.content, "// c");
        assert_eq!(comment.style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn empty_code_shows_the_placeholder() {
        let mut highlighter = CodeHighlighter::default();
        let rendered: Vec<String> = highlighter.highlight(b"").iter().map(text).collect();
        assert_eq!(rendered, vec![crate::flow::format::NO_CODE_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn same_source_is_highlighted_once() {
        let mut highlighter = CodeHighlighter::default();
        highlighter.highlight(b"pub contract A {}");
        highlighter.highlight(b"pub contract A {}");
        assert_eq!(highlighter.passes(), 1);

        highlighter.highlight(b"pub contract B {}");
        assert_eq!(highlighter.passes(), 2);
    }
}
