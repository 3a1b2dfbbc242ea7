//! Import collection for Kotlin units.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// # Example
///
/// ```
/// use stylegen_codegen_kotlin::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("androidx.compose.ui.unit", "dp");
/// imports.add("androidx.compose.ui.unit", "Dp");
/// imports.add("com.example", "ButtonColors");
///
/// assert_eq!(
///     imports.lines("com.example"),
///     vec!["import androidx.compose.ui.unit.Dp", "import androidx.compose.ui.unit.dp"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Package -> set of symbols
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a package.
    pub fn add(&mut self, package: &str, symbol: &str) {
        self.imports
            .entry(package.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add every `(package, symbol)` pair.
    pub fn extend<'a>(&mut self, imports: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (package, symbol) in imports {
            self.add(package, symbol);
        }
    }

    pub fn has_symbol(&self, package: &str, symbol: &str) -> bool {
        self.imports
            .get(package)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Import lines sorted by fully qualified name, skipping symbols that
    /// live in `current_package`.
    pub fn lines(&self, current_package: &str) -> Vec<String> {
        let qualified: BTreeSet<String> = self
            .imports
            .iter()
            .filter(|(package, _)| package.as_str() != current_package)
            .flat_map(|(package, symbols)| symbols.iter().map(move |s| format!("{}.{}", package, s)))
            .collect();
        qualified
            .into_iter()
            .map(|name| format!("import {}", name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates() {
        let mut imports = ImportCollector::new();
        imports.add("androidx.compose.ui.graphics", "Color");
        imports.add("androidx.compose.ui.graphics", "Color");
        assert_eq!(imports.lines("com.example").len(), 1);
        assert!(imports.has_symbol("androidx.compose.ui.graphics", "Color"));
    }

    #[test]
    fn test_sorted_across_packages() {
        let mut imports = ImportCollector::new();
        imports.extend([
            ("com.sdds.compose.uikit.interactions", "asInteractive"),
            ("androidx.compose.runtime", "compositionLocalOf"),
            ("androidx.compose.runtime", "Immutable"),
        ]);
        assert_eq!(
            imports.lines("com.example"),
            vec![
                "import androidx.compose.runtime.Immutable",
                "import androidx.compose.runtime.compositionLocalOf",
                "import com.sdds.compose.uikit.interactions.asInteractive",
            ]
        );
    }

    #[test]
    fn test_skips_current_package() {
        let mut imports = ImportCollector::new();
        imports.add("com.sdds.compose.uikit.interactions", "InteractiveColor");
        assert!(imports.lines("com.sdds.compose.uikit.interactions").is_empty());
        assert!(!imports.is_empty());
    }
}
