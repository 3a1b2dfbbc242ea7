use stylegen_codegen::language::NamingConvention;

/// Kotlin hard keywords; soft keywords such as `data` or `value` are legal
/// names and stay unquoted.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
        "try", "typealias", "typeof", "val", "var", "when", "while",
    ],
    quotes: ("`", "`"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kotlin_reserved_words() {
        assert!(KOTLIN_NAMING.is_reserved("object"));
        assert!(KOTLIN_NAMING.is_reserved("in"));
        assert!(!KOTLIN_NAMING.is_reserved("shape"));
        assert!(!KOTLIN_NAMING.is_reserved("data"));
    }

    #[test]
    fn test_kotlin_escape_reserved() {
        assert_eq!(KOTLIN_NAMING.safe_name("in"), "`in`");
        assert_eq!(KOTLIN_NAMING.safe_name("padding"), "padding");
    }
}
