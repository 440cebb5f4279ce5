//! 表示名の解決
//!
//! カタログは完全一致のロケールしか返さないため、利用側はここでフォールバックする。

use crate::locale::language_of;
use crate::translation::Translations;

/// Locales tried when resolving a display name
///
/// 1. `locale`
/// 2. language part of `locale` (`nl_BE` → `nl`)
/// 3. `fallback`
///
/// Duplicates and empty entries are removed.
#[must_use]
pub fn fallback_chain<'a>(locale: &'a str, fallback: &'a str) -> Vec<&'a str> {
    let mut chain = Vec::with_capacity(3);

    for candidate in [locale, language_of(locale), fallback] {
        if !candidate.is_empty() && !chain.contains(&candidate) {
            chain.push(candidate);
        }
    }

    chain
}

/// Display name of `key` for `locale`, following [`fallback_chain`].
#[must_use]
pub fn display_name(
    translations: &impl Translations,
    key: &str,
    locale: &str,
    fallback: &str,
) -> Option<String> {
    let name = fallback_chain(locale, fallback)
        .into_iter()
        .find_map(|candidate| translations.translation(key, candidate))?;

    Some(name.to_string())
}

/// Like [`display_name`], but returns the holiday key itself when nothing matches.
#[must_use]
pub fn display_name_or_key(
    translations: &impl Translations,
    key: &str,
    locale: &str,
    fallback: &str,
) -> String {
    display_name(translations, key, locale, fallback).unwrap_or_else(|| {
        tracing::debug!(key, locale, "No translation found, using holiday key");
        key.to_string()
    })
}
