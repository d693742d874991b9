// src/symbols/extract.rs
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::comments;
use super::derive::derive_symbol;
use super::patterns::LanguageTable;
use super::Symbol;
use crate::error::Result;
use crate::lang::Lang;

/// Applies the language table to source text. Built once and shared by
/// reference between the scanner and the graph builder.
#[derive(Debug, Clone)]
pub struct Extractor {
    table: LanguageTable,
}

impl Extractor {
    /// Compiles every language table.
    ///
    /// # Errors
    /// Returns `Regex` if a table row does not compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: LanguageTable::new()?,
        })
    }

    #[must_use]
    pub fn table(&self) -> &LanguageTable {
        &self.table
    }

    /// Returns the declaration lines of `content`, in source order.
    #[must_use]
    pub fn extract(&self, content: &str, lang: Lang) -> Vec<String> {
        let Some(spec) = self.table.spec(lang) else {
            return Vec::new();
        };
        let text = comments::strip_blocks(spec, content);
        comments::code_lines(spec, &text)
            .filter(|line| spec.patterns.is_match(line))
            .map(str::to_string)
            .collect()
    }

    /// Reads and extracts one file. Unreadable or non-UTF-8 files yield nothing.
    #[must_use]
    pub fn extract_file(&self, path: &Path, lang: Lang) -> Vec<String> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let symbols = self.extract(&content, lang);
                debug!(path = %path.display(), %lang, count = symbols.len(), "extracted");
                symbols
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read source file");
                Vec::new()
            }
        }
    }

    /// Recovers `(name, kind)` from a stored declaration line.
    #[must_use]
    pub fn derive(&self, line: &str, lang: Option<Lang>) -> Symbol {
        derive_symbol(&self.table, line, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolKind;

    #[test]
    fn test_no_matches_is_empty() {
        let ex = Extractor::new().unwrap();
        assert!(ex.extract("x = 1\nprint(x)\n", Lang::Python).is_empty());
        assert!(ex.extract("", Lang::Rust).is_empty());
    }

    #[test]
    fn test_python_lines() {
        let ex = Extractor::new().unwrap();
        let src = "import os\n\nclass Repo(Base):\n    def load(self, path):\n        return path\n";
        assert_eq!(
            ex.extract(src, Lang::Python),
            vec!["class Repo(Base):", "def load(self, path):"]
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let ex = Extractor::new().unwrap();
        assert!(ex
            .extract_file(Path::new("/definitely/not/here.py"), Lang::Python)
            .is_empty());
    }

    #[test]
    fn test_derive_delegates() {
        let ex = Extractor::new().unwrap();
        let sym = ex.derive("type Server struct {", Some(Lang::Go));
        assert_eq!(sym.name, "Server");
        assert_eq!(sym.kind, SymbolKind::Class);
    }
}
