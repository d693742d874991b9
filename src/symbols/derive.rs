// src/symbols/derive.rs
//! Best-effort `(name, kind)` recovery from a stored declaration line.

use super::patterns::LanguageTable;
use super::{Symbol, SymbolKind};
use crate::lang::Lang;

const CONSTRUCTOR: &str = "constructor";
const ASYNC: &str = "async";

/// Derives the symbol a declaration line introduces.
///
/// Tries the generic table, then the language's own table (when the language
/// is known), then falls back to the text before the first `(` as a method.
#[must_use]
pub fn derive_symbol(table: &LanguageTable, line: &str, lang: Option<Lang>) -> Symbol {
    match match_patterns(table, line, lang) {
        Some(sym) => normalize(sym, line),
        None => fallback(line),
    }
}

fn match_patterns(table: &LanguageTable, line: &str, lang: Option<Lang>) -> Option<Symbol> {
    table.derivation().first_match(line).or_else(|| {
        lang.and_then(|l| table.spec(l))
            .and_then(|spec| spec.patterns.first_match(line))
    })
}

fn normalize(mut sym: Symbol, line: &str) -> Symbol {
    if line.contains(CONSTRUCTOR) {
        sym.name = CONSTRUCTOR.to_string();
    } else if sym.name == ASYNC {
        if let Some(real) = last_token(line) {
            sym.name = real;
        }
    }
    sym
}

fn last_token(line: &str) -> Option<String> {
    line.split_whitespace()
        .last()
        .map(|t| t.trim_matches(|c: char| !(c.is_alphanumeric() || c == '_')))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// The text before the first `(`, trimmed, as a method.
#[must_use]
pub fn fallback(line: &str) -> Symbol {
    let name = line.split('(').next().unwrap_or_default().trim();
    Symbol::new(name, SymbolKind::Method)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(line: &str, lang: Option<Lang>) -> Symbol {
        let table = LanguageTable::new().unwrap();
        derive_symbol(&table, line, lang)
    }

    #[test]
    fn test_python_class_with_base() {
        assert_eq!(
            derive("class Foo(Bar):", Some(Lang::Python)),
            Symbol::new("Foo", SymbolKind::Class)
        );
    }

    #[test]
    fn test_js_function() {
        assert_eq!(
            derive("function bar(x) {", Some(Lang::JavaScript)),
            Symbol::new("bar", SymbolKind::Method)
        );
    }

    #[test]
    fn test_constructor_renamed() {
        let sym = derive("constructor(props) {", Some(Lang::JavaScript));
        assert_eq!(sym, Symbol::new("constructor", SymbolKind::Method));
    }

    #[test]
    fn test_async_capture_replaced_by_last_token() {
        let sym = derive("async () { handler", None);
        assert_eq!(sym.name, "handler");
        assert_eq!(sym.kind, SymbolKind::Method);
    }

    #[test]
    fn test_language_table_used_after_generic() {
        let sym = derive("pub trait Shape {", Some(Lang::Rust));
        assert_eq!(sym, Symbol::new("Shape", SymbolKind::Class));
        let sym = derive("public int add(int a, int b) throws Overflow {", Some(Lang::Java));
        assert_eq!(sym, Symbol::new("add", SymbolKind::Method));
    }

    #[test]
    fn test_fallback_before_paren() {
        let sym = derive("weird thing(stuff", None);
        assert_eq!(sym, Symbol::new("weird thing", SymbolKind::Method));
        assert_eq!(fallback("no parens here").name, "no parens here");
    }
}
