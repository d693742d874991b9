// src/lang.rs
//! Supported languages and their lexical declaration tables.
//!
//! Each [`Lang`] carries its comment family, line-comment prefixes and an
//! ordered list of `(pattern, kind)` pairs. Type-shaped forms come before
//! call-shaped forms so the first match is the most specific one. Adding a
//! language means adding a variant and its rows here; the extractor does not
//! change.

use std::path::Path;

use crate::symbols::SymbolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    Python,
    Ruby,
    JavaScript,
    Java,
    Cpp,
    Go,
    Rust,
}

/// How block comments look in a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentFamily {
    /// Triple-quoted blocks (`"""` / `'''`).
    Indentation,
    /// `/* ... */` blocks.
    Brace,
}

pub type PatternRow = (&'static str, SymbolKind);

impl Lang {
    pub const ALL: [Lang; 7] = [
        Self::Python,
        Self::Ruby,
        Self::JavaScript,
        Self::Java,
        Self::Cpp,
        Self::Go,
        Self::Rust,
    ];

    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "py" | "pyw" => Some(Self::Python),
            "rb" => Some(Self::Ruby),
            "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" => Some(Self::JavaScript),
            "java" => Some(Self::Java),
            "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" | "hh" => Some(Self::Cpp),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_ext)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Ruby => "ruby",
            Self::JavaScript => "javascript",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }

    #[must_use]
    pub fn family(self) -> CommentFamily {
        match self {
            Self::Python | Self::Ruby => CommentFamily::Indentation,
            _ => CommentFamily::Brace,
        }
    }

    /// Lines starting with any of these are dropped before matching.
    #[must_use]
    pub fn line_comment_prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Python | Self::Ruby => &["#"],
            // `#` drops preprocessor lines and attributes.
            Self::Cpp | Self::Rust => &["//", "#"],
            Self::JavaScript | Self::Java | Self::Go => &["//"],
        }
    }

    #[must_use]
    pub fn patterns(self) -> &'static [PatternRow] {
        match self {
            Self::Python => PYTHON,
            Self::Ruby => RUBY,
            Self::JavaScript => JAVASCRIPT,
            Self::Java => JAVA,
            Self::Cpp => CPP,
            Self::Go => GO,
            Self::Rust => RUST,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Block comment delimiters per family, as regexes.
#[must_use]
pub fn block_comment_patterns(family: CommentFamily) -> &'static [&'static str] {
    match family {
        CommentFamily::Indentation => &[r#"(?s)""".*?""""#, r"(?s)'''.*?'''"],
        CommentFamily::Brace => &[r"(?s)/\*.*?\*/"],
    }
}

/// Language-agnostic table used to recover `(name, kind)` from any stored line.
pub const DERIVATION: &[PatternRow] = &[
    (r"class\s+(\w+)", SymbolKind::Class),
    (r"function\s+(\w+)", SymbolKind::Method),
    (r"def\s+(\w+)", SymbolKind::Method),
    (r"(\w+)\s*\([^)]*\)\s*\{", SymbolKind::Method),
    (r"(\w+)\s*=\s*(?:async\s+)?\([^)]*\)\s*=>", SymbolKind::Method),
    (r"type\s+(\w+)", SymbolKind::Class),
    (r"interface\s+(\w+)", SymbolKind::Class),
    (r"struct\s+(\w+)", SymbolKind::Class),
];

/// Words that open a statement line (`return foo(x);`, `new Widget(a) {`).
/// Only rejected when followed by whitespace, so a method named `delete(id) {`
/// still counts.
pub const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "elif", "for", "foreach", "while", "do", "switch", "case", "catch", "try",
    "return", "throw", "new", "delete", "await", "yield", "typeof", "sizeof",
];

/// Reserved words that can never name a declaration. `function` covers
/// anonymous callbacks (`function (e) {`).
pub const CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "elif", "for", "foreach", "while", "switch", "catch", "return", "throw",
    "typeof", "sizeof", "function",
];

const PYTHON: &[PatternRow] = &[
    (r"class\s+(\w+)(?:\(.*\))?\s*:", SymbolKind::Class),
    (r"def\s+(\w+)\s*\(", SymbolKind::Method),
];

const RUBY: &[PatternRow] = &[
    (r"class\s+(\w+)", SymbolKind::Class),
    (r"module\s+(\w+)", SymbolKind::Class),
    (r"def\s+(?:self\.)?(\w+)", SymbolKind::Method),
    (r"attr_(?:reader|writer|accessor)\s+:(\w+)", SymbolKind::Method),
];

const JAVASCRIPT: &[PatternRow] = &[
    (r"(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(\w+)", SymbolKind::Class),
    (r"(?:export\s+)?interface\s+(\w+)", SymbolKind::Class),
    (r"(?:export\s+)?type\s+(\w+)\s*(?:<[^>]*>)?\s*=", SymbolKind::Class),
    (
        r"(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*(\w+)\s*\(",
        SymbolKind::Method,
    ),
    (
        r"(?:export\s+)?(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?(?:\([^)]*\)|\w+)\s*=>",
        SymbolKind::Method,
    ),
    (r"(?:async\s+)?(\w+)\s*\([^)]*\)\s*\{", SymbolKind::Method),
];

const JAVA: &[PatternRow] = &[
    (
        r"(?:(?:public|private|protected|abstract|final|static)\s+)*class\s+(\w+)",
        SymbolKind::Class,
    ),
    (r"(?:(?:public|private|protected)\s+)?interface\s+(\w+)", SymbolKind::Class),
    (r"(?:(?:public|private|protected)\s+)?enum\s+(\w+)", SymbolKind::Class),
    (
        r"(?:(?:public|private|protected|static|final|abstract|synchronized)\s+)*[\w<>\[\],.?]+\s+(\w+)\s*\([^)]*\)",
        SymbolKind::Method,
    ),
];

const CPP: &[PatternRow] = &[
    (r"class\s+(\w+)", SymbolKind::Class),
    (r"struct\s+(\w+)", SymbolKind::Class),
    (r"namespace\s+(\w+)", SymbolKind::Class),
    (r"enum(?:\s+class)?\s+(\w+)", SymbolKind::Class),
    (
        r"^(?:[\w:<>*&,]+\s+)+[*&]*(?:\w+::)*(\w+)\s*\([^)]*\)\s*(?:const)?\s*(?:noexcept)?\s*(?:override)?\s*(?:final)?\s*(?:=\s*\w+)?\s*(?:\{|;)",
        SymbolKind::Method,
    ),
];

const GO: &[PatternRow] = &[
    (r"type\s+(\w+)\s+struct", SymbolKind::Class),
    (r"type\s+(\w+)\s+interface", SymbolKind::Class),
    (r"func\s+(\w+)\s*(?:\[[^\]]*\])?\s*\(", SymbolKind::Method),
    (r"func\s*\([^)]*\)\s*(\w+)\s*\(", SymbolKind::Method),
];

// `fn` precedes `impl` so `fn f() -> impl Trait` stays a method.
const RUST: &[PatternRow] = &[
    (r"struct\s+(\w+)", SymbolKind::Class),
    (r"enum\s+(\w+)", SymbolKind::Class),
    (r"trait\s+(\w+)", SymbolKind::Class),
    (r"fn\s+(\w+)\s*(?:<[^>]*>)?\s*\(", SymbolKind::Method),
    (r"impl(?:\s*<[^>]*>)?\s+(\w+)", SymbolKind::Class),
];
