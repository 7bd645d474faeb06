//! Line-based syntax highlighter
//!
//! Text is split on `\n` and every line is classified on its own: no
//! state (open strings, block comments) carries over between lines.
//! Within a line, rules are tried in a fixed priority order at the scan
//! cursor and the first one matching exactly there wins.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, trace};

use super::language::LanguageId;
use super::registry::{config_for, LanguageConfig};
use super::rules::PatternRule;
use super::style::{Span, Style};
use super::theme::Theme;
use super::tokens::TokenType;

/// A contiguous slice of the input with an optional token category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRun<'a> {
    /// Text of the run, borrowed from the highlighted input
    pub text: &'a str,
    /// Token category, `None` for plain text
    pub token: Option<TokenType>,
}

impl<'a> StyledRun<'a> {
    /// Create a plain run
    pub fn plain(text: &'a str) -> Self {
        Self { text, token: None }
    }

    /// Create a run with a token category
    pub fn styled(text: &'a str, token: TokenType) -> Self {
        Self {
            text,
            token: Some(token),
        }
    }

    /// Resolve the display style through a theme (`None` for plain text)
    pub fn style(&self, theme: &Theme) -> Option<Style> {
        self.token.map(|token| theme.style_for(token))
    }
}

/// Rules for one language, compiled once
pub struct CompiledLanguage {
    /// Whole-line comment marker (empty disables the short-circuit)
    comment_marker: &'static str,
    /// Rules in priority order: string, number, keyword, type, builtin
    rules: Vec<PatternRule>,
}

/// Leftmost match of a rule at or after the cursor
///
/// A rule whose next match starts past the cursor cannot match at the
/// cursor, so it is not searched again until the cursor catches up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead {
    /// Not searched since the cursor moved past the last result
    Stale,
    /// Next match spans these byte offsets (start, end)
    Found(usize, usize),
    /// No match anywhere in the rest of the line
    Exhausted,
}

static COMPILED: LazyLock<HashMap<LanguageId, CompiledLanguage>> = LazyLock::new(|| {
    LanguageId::ALL
        .into_iter()
        .map(|id| {
            debug!(language = %id, "compiling highlight rules");
            (id, CompiledLanguage::new(config_for(id)))
        })
        .collect()
});

static PLAIN: LazyLock<CompiledLanguage> =
    LazyLock::new(|| CompiledLanguage::new(&LanguageConfig::plain()));

impl CompiledLanguage {
    /// Compile the rules for an arbitrary configuration
    pub fn new(config: &LanguageConfig) -> Self {
        let rules = [
            PatternRule::delimited("string", &config.string_delimiters, TokenType::String),
            PatternRule::new("number", config.number_pattern, TokenType::Number),
            PatternRule::word_set("keyword", config.keywords.iter().copied(), TokenType::Keyword),
            PatternRule::word_set("type", config.types.iter().copied(), TokenType::Type),
            PatternRule::word_set("builtin", config.builtins.iter().copied(), TokenType::Builtin),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            comment_marker: config.single_line_comment,
            rules,
        }
    }

    /// Rules that classify nothing: every line comes back as plain text
    pub fn identity() -> Self {
        Self {
            comment_marker: "",
            rules: Vec::new(),
        }
    }

    /// Get the shared compiled rules for a built-in language
    pub fn for_language(id: LanguageId) -> &'static CompiledLanguage {
        COMPILED.get(&id).unwrap_or_else(|| &*PLAIN)
    }

    /// Names of the active rules, in priority order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    fn is_comment_line(&self, line: &str) -> bool {
        !self.comment_marker.is_empty() && line.trim_start().starts_with(self.comment_marker)
    }

    /// Classify a single line (no newlines) into token spans
    ///
    /// Spans are sorted, non-overlapping byte ranges; text between them is
    /// plain.
    pub fn line_tokens(&self, line: &str) -> Vec<Span> {
        if line.is_empty() {
            return Vec::new();
        }
        if self.is_comment_line(line) {
            return vec![Span::new(0, line.len(), TokenType::Comment)];
        }

        let mut spans = Vec::new();
        let mut lookahead = vec![Lookahead::Stale; self.rules.len()];
        let mut pos = 0;

        while pos < line.len() {
            let mut hit = None;
            for (rule, ahead) in self.rules.iter().zip(lookahead.iter_mut()) {
                if matches!(*ahead, Lookahead::Found(start, _) if start < pos) {
                    *ahead = Lookahead::Stale;
                }
                if *ahead == Lookahead::Stale {
                    *ahead = match rule.find_at(line, pos) {
                        Some((start, end)) => Lookahead::Found(start, end),
                        None => Lookahead::Exhausted,
                    };
                }
                if let Lookahead::Found(start, end) = *ahead {
                    if start == pos && end > pos {
                        hit = Some((end, rule.token_type));
                        break;
                    }
                }
            }

            match hit {
                Some((end, token)) => {
                    spans.push(Span::new(pos, end, token));
                    pos = end;
                }
                None => {
                    // Plain character: step over it whole
                    pos += line[pos..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        spans
    }

    /// Highlight a single line (no newlines) into runs covering it exactly
    pub fn highlight_line<'a>(&self, line: &'a str) -> Vec<StyledRun<'a>> {
        let mut spans = self.line_tokens(line);
        spans.sort_by_key(|s| s.start);

        let mut runs = Vec::with_capacity(spans.len() * 2 + 1);
        let mut pos = 0;
        for span in spans {
            if pos < span.start {
                runs.push(StyledRun::plain(&line[pos..span.start]));
            }
            runs.push(StyledRun::styled(&line[span.start..span.end], span.token));
            pos = span.end;
        }
        if pos < line.len() {
            runs.push(StyledRun::plain(&line[pos..]));
        }
        runs
    }

    /// Highlight text, grouped by physical line (newlines excluded)
    pub fn highlight_lines<'a>(&self, text: &'a str) -> Vec<Vec<StyledRun<'a>>> {
        text.split('\n').map(|line| self.highlight_line(line)).collect()
    }

    /// Highlight text into one run sequence, newlines included as plain runs
    pub fn highlight<'a>(&self, text: &'a str) -> Vec<StyledRun<'a>> {
        let mut runs = Vec::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                runs.push(StyledRun::plain("\n"));
            }
            runs.extend(self.highlight_line(line));
        }
        runs
    }
}

/// Highlight `text` as language `id`
///
/// The concatenated run texts always equal `text`.
pub fn highlight(text: &str, id: LanguageId) -> Vec<StyledRun<'_>> {
    trace!(language = %id, bytes = text.len(), "highlight");
    CompiledLanguage::for_language(id).highlight(text)
}

/// Highlight a single line (without its newline) as language `id`
pub fn highlight_line(line: &str, id: LanguageId) -> Vec<StyledRun<'_>> {
    CompiledLanguage::for_language(id).highlight_line(line)
}

/// Highlight `text` as language `id`, one run list per physical line
pub fn highlight_lines(text: &str, id: LanguageId) -> Vec<Vec<StyledRun<'_>>> {
    trace!(language = %id, bytes = text.len(), "highlight_lines");
    CompiledLanguage::for_language(id).highlight_lines(text)
}
