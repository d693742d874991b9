// src/symbols/patterns.rs
//! Compiled, immutable pattern tables.

use regex::Regex;

use super::{Symbol, SymbolKind};
use crate::error::Result;
use crate::lang::{self, Lang, PatternRow, CONTROL_KEYWORDS, STATEMENT_KEYWORDS};

/// An ordered list of declaration patterns. The first usable match wins.
#[derive(Debug, Clone)]
pub struct PatternSet {
    rows: Vec<(Regex, SymbolKind)>,
}

impl PatternSet {
    /// Compiles a pattern table.
    ///
    /// # Errors
    /// Returns `Regex` if a row does not compile.
    pub fn compile(rows: &[PatternRow]) -> Result<Self> {
        let rows = rows
            .iter()
            .map(|(src, kind)| -> Result<(Regex, SymbolKind)> { Ok((Regex::new(src)?, *kind)) })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Returns the name captured by the first pattern that matches `line`.
    ///
    /// Statement lines (`return foo(x);`) never match, and a capture that is
    /// a control-flow word (`if (x) {`) falls through to the next row.
    #[must_use]
    pub fn first_match(&self, line: &str) -> Option<Symbol> {
        if starts_with_statement(line) {
            return None;
        }
        self.rows.iter().find_map(|(re, kind)| {
            let name = re.captures(line)?.get(1)?.as_str();
            if CONTROL_KEYWORDS.contains(&name) {
                return None;
            }
            Some(Symbol::new(name, *kind))
        })
    }

    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.first_match(line).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn starts_with_statement(line: &str) -> bool {
    let end = line
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    let (first, rest) = line.split_at(end);
    STATEMENT_KEYWORDS.contains(&first) && rest.starts_with(char::is_whitespace)
}

/// Everything the extractor needs to know about one language.
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    pub lang: Lang,
    pub block_comments: Vec<Regex>,
    pub line_prefixes: &'static [&'static str],
    pub patterns: PatternSet,
}

impl LanguageSpec {
    /// Compiles the spec for one language.
    ///
    /// # Errors
    /// Returns `Regex` if a pattern does not compile.
    pub fn compile(lang: Lang) -> Result<Self> {
        let block_comments = lang::block_comment_patterns(lang.family())
            .iter()
            .map(|src| Regex::new(src))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            lang,
            block_comments,
            line_prefixes: lang.line_comment_prefixes(),
            patterns: PatternSet::compile(lang.patterns())?,
        })
    }
}

/// All language specs plus the generic derivation table, built once.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    specs: Vec<LanguageSpec>,
    derivation: PatternSet,
}

impl LanguageTable {
    /// Compiles every supported language.
    ///
    /// # Errors
    /// Returns `Regex` if any table row does not compile.
    pub fn new() -> Result<Self> {
        let specs = Lang::ALL
            .iter()
            .map(|lang| LanguageSpec::compile(*lang))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            specs,
            derivation: PatternSet::compile(lang::DERIVATION)?,
        })
    }

    #[must_use]
    pub fn spec(&self, lang: Lang) -> Option<&LanguageSpec> {
        self.specs.iter().find(|s| s.lang == lang)
    }

    #[must_use]
    pub fn derivation(&self) -> &PatternSet {
        &self.derivation
    }
}
