//! Programming-language sniffing
//!
//! Ordered first-match-wins detection over raw code text. The table is
//! data-driven so each entry stays individually testable and the
//! tie-break order is explicit.

use crate::types::CodeLanguage;

/// Detection order matters: earlier entries win ties.
const DETECTORS: &[(CodeLanguage, fn(&str) -> bool)] = &[
    (CodeLanguage::Python, looks_like_python),
    (CodeLanguage::Java, looks_like_java),
    (CodeLanguage::CSharp, looks_like_csharp),
    (CodeLanguage::Go, looks_like_go),
    (CodeLanguage::Rust, looks_like_rust),
    (CodeLanguage::Php, looks_like_php),
    (CodeLanguage::Sql, looks_like_sql),
    (CodeLanguage::Html, looks_like_html),
    (CodeLanguage::Css, looks_like_css),
    (CodeLanguage::Shell, looks_like_shell),
];

/// Detect the language of `code`, falling back to the block's prior
/// language and finally to the general-purpose default.
pub(crate) fn sniff_language(code: &str, fallback: Option<CodeLanguage>) -> CodeLanguage {
    DETECTORS
        .iter()
        .find(|(_, detect)| detect(code))
        .map(|(language, _)| *language)
        .unwrap_or_else(|| fallback.unwrap_or_default())
}

fn looks_like_python(code: &str) -> bool {
    code.contains("def ") || (code.contains("import ") && code.contains(':'))
}

fn looks_like_java(code: &str) -> bool {
    code.contains("public class") || code.contains("public static void main")
}

fn looks_like_csharp(code: &str) -> bool {
    code.contains("using System") || code.contains("namespace ")
}

fn looks_like_go(code: &str) -> bool {
    code.contains("package main") || code.contains("func ")
}

fn looks_like_rust(code: &str) -> bool {
    code.contains("fn ") || code.contains("let mut ")
}

fn looks_like_php(code: &str) -> bool {
    code.contains("<?php")
}

fn looks_like_sql(code: &str) -> bool {
    let upper = code.to_uppercase();
    (upper.contains("SELECT ") && upper.contains(" FROM "))
        || upper.contains("INSERT INTO ")
        || upper.contains("CREATE TABLE")
        || upper.contains("DELETE FROM ")
        || (upper.contains("UPDATE ") && upper.contains(" SET "))
}

fn looks_like_html(code: &str) -> bool {
    let lower = code.trim_start().to_lowercase();
    lower.starts_with("<!doctype")
        || lower.contains("<html")
        || lower.contains("<body")
        || lower.contains("<div")
        || lower.contains("<p>")
}

fn looks_like_css(code: &str) -> bool {
    code.contains('{') && code.contains(':') && code.contains(';')
}

fn looks_like_shell(code: &str) -> bool {
    code.trim_start().starts_with("#!") || code.contains("echo ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_python() {
        assert_eq!(
            sniff_language("def add(a, b):\n    return a + b", None),
            CodeLanguage::Python
        );
        assert_eq!(
            sniff_language("import os\nif True:\n    pass", None),
            CodeLanguage::Python
        );
    }

    #[test]
    fn test_sniff_java() {
        let code = "public class Main {\n  public static void main(String[] args) {}\n}";
        assert_eq!(sniff_language(code, None), CodeLanguage::Java);
    }

    #[test]
    fn test_sniff_csharp() {
        assert_eq!(
            sniff_language("using System;\nConsole.WriteLine(42);", None),
            CodeLanguage::CSharp
        );
    }

    #[test]
    fn test_sniff_go() {
        assert_eq!(
            sniff_language("package main\n\nimport \"fmt\"", None),
            CodeLanguage::Go
        );
    }

    #[test]
    fn test_sniff_rust() {
        assert_eq!(
            sniff_language("let mut total = 0;", None),
            CodeLanguage::Rust
        );
    }

    #[test]
    fn test_sniff_php() {
        assert_eq!(sniff_language("<?php echo 'hi'; ?>", None), CodeLanguage::Php);
    }

    #[test]
    fn test_sniff_sql() {
        assert_eq!(
            sniff_language("SELECT id FROM users WHERE active = 1", None),
            CodeLanguage::Sql
        );
        assert_eq!(
            sniff_language("create table posts (id int)", None),
            CodeLanguage::Sql
        );
    }

    #[test]
    fn test_sniff_html() {
        assert_eq!(
            sniff_language("<!DOCTYPE html>\n<html></html>", None),
            CodeLanguage::Html
        );
    }

    #[test]
    fn test_sniff_css() {
        assert_eq!(
            sniff_language(".card {\n  color: red;\n}", None),
            CodeLanguage::Css
        );
    }

    #[test]
    fn test_sniff_shell() {
        assert_eq!(
            sniff_language("#!/bin/bash\nls -la", None),
            CodeLanguage::Shell
        );
        assert_eq!(sniff_language("echo hello", None), CodeLanguage::Shell);
    }

    #[test]
    fn test_sniff_order_java_before_go() {
        // "public class" wins even when "func " also appears in a comment.
        let code = "public class A {} // like func main";
        assert_eq!(sniff_language(code, None), CodeLanguage::Java);
    }

    #[test]
    fn test_sniff_falls_back_to_prior_language() {
        assert_eq!(
            sniff_language("print(1)", Some(CodeLanguage::JavaScript)),
            CodeLanguage::JavaScript
        );
    }

    #[test]
    fn test_sniff_default_is_python() {
        assert_eq!(sniff_language("print(1)", None), CodeLanguage::Python);
    }
}
