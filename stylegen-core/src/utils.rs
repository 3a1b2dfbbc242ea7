//! Shared string helpers.

/// Strip `suffix` from a holder name to get the component base name
/// (e.g., "ButtonProperties" -> "Button").
///
/// Returns `None` when the name does not end with the suffix or nothing is
/// left after stripping it.
pub fn derive_base_name<'a>(holder: &'a str, suffix: &str) -> Option<&'a str> {
    holder
        .strip_suffix(suffix)
        .filter(|base| !base.is_empty())
}

/// Check that a name is a plain identifier: a letter or underscore followed
/// by letters, digits, or underscores.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Format a count with a singular or plural noun (e.g., "1 property", "2 properties").
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_base_name() {
        assert_eq!(
            derive_base_name("ButtonProperties", "Properties"),
            Some("Button")
        );
        assert_eq!(
            derive_base_name("IconButtonProperties", "Properties"),
            Some("IconButton")
        );
        assert_eq!(derive_base_name("Properties", "Properties"), None);
        assert_eq!(derive_base_name("ButtonProps", "Properties"), None);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("background"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("padding2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("with-dash"));
        assert!(!is_identifier("with space"));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "property", "properties"), "1 property");
        assert_eq!(pluralize(0, "property", "properties"), "0 properties");
        assert_eq!(pluralize(3, "file", "files"), "3 files");
    }
}
