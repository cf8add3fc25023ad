//! Ordered first-match rule lists and fixed lookup tables
//!
//! Both are plain `'static` data so every table in the crate can be audited
//! and unit-tested on its own.

/// One ordered classification entry: the `category` wins if any keyword is
/// a substring of the lowercased input.
#[derive(Debug)]
pub struct KeywordRule<C: 'static> {
    pub category: C,
    /// Keywords are stored lowercase
    pub keywords: &'static [&'static str],
}

/// Ordered (category, keyword-set) list evaluated first-match.
///
/// Total: input that matches no rule gets `default`.
#[derive(Debug)]
pub struct Classifier<C: 'static> {
    rules: &'static [KeywordRule<C>],
    default: C,
}

impl<C: Copy> Classifier<C> {
    pub const fn new(rules: &'static [KeywordRule<C>], default: C) -> Self {
        Self { rules, default }
    }

    /// Return the first category whose keyword set hits `text`
    pub fn classify(&self, text: &str) -> C {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
            .map(|rule| rule.category)
            .unwrap_or(self.default)
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &'static [KeywordRule<C>] {
        self.rules
    }

    pub fn default_category(&self) -> C {
        self.default
    }
}

/// Immutable key → value table with an explicit default entry.
#[derive(Debug)]
pub struct Lookup<K: 'static, V: 'static> {
    entries: &'static [(K, V)],
    default: V,
}

impl<K: PartialEq, V: Copy> Lookup<K, V> {
    pub const fn new(entries: &'static [(K, V)], default: V) -> Self {
        Self { entries, default }
    }

    pub fn get(&self, key: &K) -> V {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .unwrap_or(self.default)
    }

    pub fn default_value(&self) -> V {
        self.default
    }
}
