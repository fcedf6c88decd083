//! Formatter memoization.
//!
//! Building a formatter is comparatively expensive, so formatters are built
//! once per distinct (locale list, options) pair and then reused. Option
//! structs are compared structurally: two option values with equal fields
//! share one formatter no matter how they were built.
//!
//! The cache performs no locking. It uses `Rc`/`RefCell` and is therefore
//! confined to one thread; share it between facades with
//! `Rc<FormatterCache>`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter as FmtFormatter, Result as FmtResult};
use std::hash::Hash;
use std::rc::Rc;

use crate::provider::{DateTimeFormatter, FormatterProvider, NumberFormatter, PluralRules};
use crate::types::{DateTimeFormatOptions, NumberFormatOptions, PluralRulesOptions};

/// A grow-only memo table: at most one value is built per key.
pub struct Memoized<K, T: ?Sized> {
    entries: RefCell<HashMap<K, Rc<T>>>,
}

impl<K: Eq + Hash, T: ?Sized> Memoized<K, T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Return the value for `key`, building it on first use.
    pub fn get_or_insert_with(&self, key: K, build: impl FnOnce(&K) -> Rc<T>) -> Rc<T> {
        if let Some(value) = self.entries.borrow().get(&key) {
            return Rc::clone(value);
        }
        let value = build(&key);
        self.entries.borrow_mut().insert(key, Rc::clone(&value));
        value
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with), but `build`
    /// may decline. Nothing is stored in that case.
    pub fn get_or_try_insert_with(
        &self,
        key: K,
        build: impl FnOnce(&K) -> Option<Rc<T>>,
    ) -> Option<Rc<T>> {
        if let Some(value) = self.entries.borrow().get(&key) {
            return Some(Rc::clone(value));
        }
        let value = build(&key)?;
        self.entries.borrow_mut().insert(key, Rc::clone(&value));
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<K: Eq + Hash, T: ?Sized> Default for Memoized<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T: ?Sized> Debug for Memoized<K, T> {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        f.debug_struct("Memoized")
            .field("len", &self.entries.borrow().len())
            .finish()
    }
}

/// Canonical cache key: the requested locales plus the full options bag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatterKey<O> {
    pub locales: Vec<String>,
    pub options: O,
}

impl<O> FormatterKey<O> {
    pub fn new(locales: &[String], options: O) -> Self {
        Self {
            locales: locales.to_vec(),
            options,
        }
    }
}

/// Memoized formatters, one table per formatter kind.
///
/// A cache should only be shared between facades that use the same
/// provider, since keys do not record which provider built a formatter.
#[derive(Debug, Default)]
pub struct FormatterCache {
    number: Memoized<FormatterKey<NumberFormatOptions>, dyn NumberFormatter>,
    date_time: Memoized<FormatterKey<DateTimeFormatOptions>, dyn DateTimeFormatter>,
    plural: Memoized<FormatterKey<PluralRulesOptions>, dyn PluralRules>,
}

impl FormatterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached number formatters.
    pub fn number_formatters(&self) -> usize {
        self.number.len()
    }

    /// Number of cached date-time formatters.
    pub fn date_time_formatters(&self) -> usize {
        self.date_time.len()
    }

    /// Number of cached plural rules.
    pub fn plural_rules(&self) -> usize {
        self.plural.len()
    }
}

/// A provider paired with the cache that memoizes what it builds.
#[derive(Clone, Copy)]
pub struct Formatters<'a> {
    provider: &'a dyn FormatterProvider,
    cache: &'a FormatterCache,
}

impl<'a> Formatters<'a> {
    pub fn new(provider: &'a dyn FormatterProvider, cache: &'a FormatterCache) -> Self {
        Self { provider, cache }
    }

    pub fn number_format(
        &self,
        locales: &[String],
        options: &NumberFormatOptions,
    ) -> Rc<dyn NumberFormatter> {
        let key = FormatterKey::new(locales, options.clone());
        self.cache.number.get_or_insert_with(key, |key| {
            tracing::debug!(kind = "number", locales = ?key.locales, options = ?key.options, "formatter cache miss");
            Rc::from(self.provider.number_format(&key.locales, &key.options))
        })
    }

    pub fn date_time_format(
        &self,
        locales: &[String],
        options: &DateTimeFormatOptions,
    ) -> Rc<dyn DateTimeFormatter> {
        let key = FormatterKey::new(locales, options.clone());
        self.cache.date_time.get_or_insert_with(key, |key| {
            tracing::debug!(kind = "date_time", locales = ?key.locales, options = ?key.options, "formatter cache miss");
            Rc::from(self.provider.date_time_format(&key.locales, &key.options))
        })
    }

    /// Plural rules, or `None` when the provider has no plural capability.
    pub fn plural_rules(
        &self,
        locales: &[String],
        options: PluralRulesOptions,
    ) -> Option<Rc<dyn PluralRules>> {
        let key = FormatterKey::new(locales, options);
        self.cache.plural.get_or_try_insert_with(key, |key| {
            tracing::debug!(kind = "plural", locales = ?key.locales, options = ?key.options, "formatter cache miss");
            self.provider
                .plural_rules(&key.locales, &key.options)
                .map(Rc::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::provider::BasicFormatterProvider;

    #[test]
    #[traced_test]
    fn second_lookup_is_a_hit() {
        let cache = FormatterCache::new();
        let formatters = Formatters::new(&BasicFormatterProvider, &cache);
        let locales = vec!["en".to_string()];

        let first = formatters.number_format(&locales, &NumberFormatOptions::default());
        let second = formatters.number_format(&locales, &NumberFormatOptions::default());

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.number_formatters(), 1);
        assert!(logs_contain("formatter cache miss"));
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("formatter cache miss"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one cache miss, saw {n}")),
            }
        });
    }

    #[test]
    fn memoized_skips_declined_builds() {
        let memo: Memoized<u8, str> = Memoized::new();
        assert!(memo.get_or_try_insert_with(1, |_| None).is_none());
        assert!(memo.is_empty());
        let value = memo.get_or_try_insert_with(1, |_| Some(Rc::from("one")));
        assert_eq!(value.as_deref(), Some("one"));
        assert_eq!(memo.len(), 1);
    }
}
