//! Identifier and metadata validation for generated Solidity.

/// Solidity reserved words that cannot name a contract.
pub(crate) const SOLIDITY_KEYWORDS: &[&str] = &[
    "abstract", "address", "after", "alias", "anonymous", "apply", "as", "assembly", "auto",
    "bool", "break", "byte", "bytes", "calldata", "case", "catch", "constant", "constructor",
    "continue", "contract", "copyof", "default", "define", "delete", "do", "else", "emit", "enum",
    "error", "event", "external", "fallback", "false", "final", "for", "function", "hex", "if",
    "immutable", "implements", "import", "in", "indexed", "inline", "interface", "internal", "is",
    "let", "library", "macro", "mapping", "match", "memory", "modifier", "mutable", "new", "null",
    "of", "override", "partial", "payable", "pragma", "private", "promise", "public", "pure",
    "receive", "reference", "relocatable", "return", "returns", "revert", "sealed", "sizeof",
    "static", "storage", "string", "struct", "super", "supports", "switch", "this", "throw",
    "true", "try", "type", "typedef", "typeof", "unchecked", "uint", "int", "using", "var",
    "view", "virtual", "while",
];

/// Check if a name is a Solidity reserved word, including sized elementary
/// types such as `uint256`, `bytes32` and `fixed128x18`.
pub(crate) fn is_solidity_keyword(name: &str) -> bool {
    SOLIDITY_KEYWORDS.contains(&name) || is_sized_type(name)
}

fn is_sized_type(name: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    for prefix in ["uint", "int", "bytes"] {
        if let Some(size) = name.strip_prefix(prefix)
            && all_digits(size)
        {
            return true;
        }
    }
    for prefix in ["ufixed", "fixed"] {
        if let Some(rest) = name.strip_prefix(prefix) {
            if rest.is_empty() {
                return true;
            }
            if let Some((m, n)) = rest.split_once('x')
                && all_digits(m)
                && all_digits(n)
            {
                return true;
            }
        }
    }
    false
}

/// Validate that free text fits on a single comment or string line.
pub(crate) fn validate_single_line(text: &str) -> Option<&'static str> {
    text.chars()
        .any(char::is_control)
        .then_some("must be a single line without control characters")
}

/// Validate an SPDX license expression.
pub(crate) fn validate_license(license: &str) -> Option<&'static str> {
    if license.trim().is_empty() {
        return Some("license cannot be empty");
    }
    if let Some(reason) = validate_single_line(license) {
        return Some(reason);
    }
    let spdx = |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '+' | '(' | ')' | ':' | ' ')
    };
    if !license.chars().all(spdx) {
        return Some("must be an SPDX license expression");
    }
    None
}

/// Validate that a string is a valid Solidity identifier.
/// Returns `None` if valid, or `Some(reason)` if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Some("identifier cannot be empty");
    };

    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Some("identifier must start with a letter, underscore or dollar sign");
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("identifier may only contain letters, digits, underscores and dollar signs");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert_eq!(validate_identifier("MyHook"), None);
        assert_eq!(validate_identifier("_hook2"), None);
        assert_eq!(validate_identifier("$hook"), None);
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2Hook").is_some());
        assert!(validate_identifier("My Hook").is_some());
        assert!(validate_identifier("my-hook").is_some());
    }

    #[test]
    fn test_keywords() {
        assert!(is_solidity_keyword("contract"));
        assert!(is_solidity_keyword("override"));
        assert!(!is_solidity_keyword("MyHook"));
    }

    #[test]
    fn test_sized_types_are_keywords() {
        assert!(is_solidity_keyword("uint256"));
        assert!(is_solidity_keyword("int8"));
        assert!(is_solidity_keyword("bytes32"));
        assert!(is_solidity_keyword("fixed"));
        assert!(is_solidity_keyword("ufixed128x18"));
        assert!(!is_solidity_keyword("uintHook"));
        assert!(!is_solidity_keyword("bytesHook"));
        assert!(!is_solidity_keyword("fixedFee"));
    }

    #[test]
    fn test_license() {
        assert_eq!(validate_license("MIT"), None);
        assert_eq!(validate_license("GPL-2.0-or-later"), None);
        assert_eq!(validate_license("(MIT OR Apache-2.0)"), None);
        assert!(validate_license("").is_some());
        assert!(validate_license("MIT\npragma solidity ^0.4.0;").is_some());
        assert!(validate_license("MIT */ contract X {}").is_some());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(validate_single_line("security@example.com"), None);
        assert!(validate_single_line("a@b.c\r\nx").is_some());
        assert!(validate_single_line("tab\there").is_some());
    }
}
