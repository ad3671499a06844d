//! Locale-aware ordering of post titles

use crate::error::{PostStoreError, Result};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;

/// Parse a BCP-47 language tag such as `en` or `fr-CA`.
pub fn parse_locale(tag: &str) -> Result<Locale> {
    tag.parse::<Locale>()
        .map_err(|e| PostStoreError::Config(format!("Invalid locale '{}': {}", tag, e)))
}

/// Compares titles with the collation rules of one locale.
///
/// Accented letters sort next to their base letter and case differences
/// only break ties, unlike a byte-wise `str` comparison.
pub struct TitleCollator {
    collator: Collator,
}

impl TitleCollator {
    pub fn new(locale: &Locale) -> Result<Self> {
        let collator =
            Collator::try_new(&locale.into(), CollatorOptions::new()).map_err(|e| {
                PostStoreError::Config(format!(
                    "No collation data for locale '{}': {}",
                    locale, e
                ))
            })?;
        Ok(TitleCollator { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Stable sort: items with equal keys keep their relative order.
    pub fn sort_by_key<T>(&self, items: &mut [T], key: impl Fn(&T) -> &str) {
        items.sort_by(|a, b| self.compare(key(a), key(b)));
    }
}
