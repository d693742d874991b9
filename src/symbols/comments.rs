// src/symbols/comments.rs
//! Comment removal ahead of pattern matching.

use std::borrow::Cow;

use super::patterns::LanguageSpec;

/// Removes block comments for the spec's family.
#[must_use]
pub fn strip_blocks<'a>(spec: &LanguageSpec, content: &'a str) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(content);
    for re in &spec.block_comments {
        if re.is_match(&text) {
            text = Cow::Owned(re.replace_all(&text, "").into_owned());
        }
    }
    text
}

/// Yields trimmed, non-empty lines that are not line comments.
pub fn code_lines<'a>(spec: &'a LanguageSpec, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(move |line| !spec.line_prefixes.iter().any(|p| line.starts_with(p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;

    fn spec(lang: Lang) -> LanguageSpec {
        LanguageSpec::compile(lang).unwrap()
    }

    #[test]
    fn test_python_docstrings_removed() {
        let py = spec(Lang::Python);
        let src = "\"\"\"\nclass Hidden:\n\"\"\"\nclass Shown:\n'''def gone(): pass'''\n";
        let text = strip_blocks(&py, src);
        let lines: Vec<_> = code_lines(&py, &text).collect();
        assert_eq!(lines, vec!["class Shown:"]);
    }

    #[test]
    fn test_brace_block_comments_removed() {
        let js = spec(Lang::JavaScript);
        let src = "/* function hidden() {\n} */\nfunction shown() {\n// function nope() {\n}";
        let text = strip_blocks(&js, src);
        let lines: Vec<_> = code_lines(&js, &text).collect();
        assert_eq!(lines, vec!["function shown() {", "}"]);
    }

    #[test]
    fn test_rust_attributes_dropped() {
        let rs = spec(Lang::Rust);
        let lines: Vec<_> = code_lines(&rs, "#[derive(Debug)]\n  pub struct A;\n").collect();
        assert_eq!(lines, vec!["pub struct A;"]);
    }

    #[test]
    fn test_untouched_text_is_borrowed() {
        let go = spec(Lang::Go);
        assert!(matches!(strip_blocks(&go, "func main() {}"), Cow::Borrowed(_)));
    }
}
