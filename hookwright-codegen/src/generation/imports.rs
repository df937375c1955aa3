//! Import collection and deduplication.

use std::collections::{BTreeMap, BTreeSet};

/// A single named import: `import {symbol} from "path";`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportRef {
    pub symbol: &'static str,
    pub path: &'static str,
}

impl ImportRef {
    pub const fn new(symbol: &'static str, path: &'static str) -> Self {
        Self { symbol, path }
    }
}

/// Tracks imports and deduplicates them.
///
/// Paths and the symbols within each path are kept sorted, so output does
/// not depend on the order imports were added in.
///
/// # Example
///
/// ```
/// use hookwright_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("@uniswap/v4-core/src/types/BalanceDelta.sol", "BalanceDeltaLibrary");
/// imports.add("@uniswap/v4-core/src/types/BalanceDelta.sol", "BalanceDelta");
///
/// assert_eq!(
///     imports.lines(),
///     vec![r#"import {BalanceDelta, BalanceDeltaLibrary} from "@uniswap/v4-core/src/types/BalanceDelta.sol";"#]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    /// Path -> set of symbols
    imports: BTreeMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a path.
    pub fn add(&mut self, path: &str, symbol: &str) {
        self.imports
            .entry(path.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add an [`ImportRef`].
    pub fn add_ref(&mut self, import: &ImportRef) {
        self.add(import.path, import.symbol);
    }

    /// Add every import from an iterator.
    pub fn extend<'a>(&mut self, imports: impl IntoIterator<Item = &'a ImportRef>) {
        for import in imports {
            self.add_ref(import);
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (path, symbols) in &other.imports {
            let entry = self.imports.entry(path.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Check if a path is already imported.
    pub fn has_path(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    /// Check if a specific symbol is imported from any path.
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.imports.values().any(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports, sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render one `import {…} from "…";` line per path.
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(path, symbols)| {
                let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                format!("import {{{}}} from \"{}\";", symbols.join(", "), path)
            })
            .collect()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of paths.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("b.sol", "B");
        imports.add("a.sol", "A2");
        imports.add("a.sol", "A1");
        imports.add("a.sol", "A1");

        assert!(imports.has_path("a.sol"));
        assert!(imports.has_symbol("A2"));
        assert!(!imports.has_symbol("C"));
        assert_eq!(imports.len(), 2);
        assert_eq!(
            imports.lines(),
            vec![
                "import {A1, A2} from \"a.sol\";".to_string(),
                "import {B} from \"b.sol\";".to_string(),
            ]
        );
    }

    #[test]
    fn test_import_collector_merge() {
        let mut a = ImportCollector::new();
        a.add_ref(&ImportRef::new("Read", "io.sol"));

        let mut b = ImportCollector::new();
        b.extend(&[ImportRef::new("Write", "io.sol"), ImportRef::new("File", "fs.sol")]);

        a.merge(&b);

        assert!(a.has_symbol("Read"));
        assert!(a.has_symbol("Write"));
        assert!(a.has_path("fs.sol"));
    }

    #[test]
    fn test_order_independent() {
        let refs = [
            ImportRef::new("X", "x.sol"),
            ImportRef::new("Y", "y.sol"),
            ImportRef::new("W", "x.sol"),
        ];
        let mut forward = ImportCollector::new();
        forward.extend(refs.iter());
        let mut backward = ImportCollector::new();
        backward.extend(refs.iter().rev());
        assert_eq!(forward, backward);
    }
}
