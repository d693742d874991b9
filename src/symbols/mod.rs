// src/symbols/mod.rs
//! Lexical symbol extraction.
//!
//! Declarations are whole source lines matched by per-language patterns.
//! A second pass recovers a `(name, kind)` pair from a stored line.

pub mod comments;
pub mod derive;
pub mod extract;
pub mod patterns;

use serde::{Deserialize, Serialize};

pub use derive::derive_symbol;
pub use extract::Extractor;
pub use patterns::{LanguageSpec, LanguageTable, PatternSet};

/// Coarse declaration taxonomy. Constructors, arrow functions and async
/// functions all land in `Method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Class,
    Method,
}

impl SymbolKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
        }
    }
}

/// Name and kind recovered from one declaration line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
