//! Translation catalogue loaded from a directory of per-holiday data files

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;

use ignore::WalkBuilder;

use super::file::{
    self,
    DataFile,
};
use super::{
    LocaleMap,
    TranslationError,
    Translations,
};
use crate::locale::LocaleSet;

/// Extension of translation data files
pub const DEFAULT_EXTENSION: &str = "json";

/// Holiday key → locale → display name, restricted to a fixed locale set.
///
/// Writes are validated against the locale set; reads never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalogue {
    /// 書き込み可能なロケール
    available_locales: LocaleSet,

    /// 祝日キー → 翻訳
    translations: HashMap<String, LocaleMap>,
}

impl TranslationCatalogue {
    /// Creates an empty catalogue accepting the given locales.
    #[must_use]
    pub fn new<I, S>(available_locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_locales(LocaleSet::new(available_locales))
    }

    #[must_use]
    pub fn with_locales(available_locales: LocaleSet) -> Self {
        Self { available_locales, translations: HashMap::new() }
    }

    /// Loads every `<holidayKey>.json` file directly inside `path`.
    ///
    /// # Errors
    /// See [`Self::load_from_directory_with_extension`].
    pub fn load_from_directory(&mut self, path: impl AsRef<Path>) -> Result<(), TranslationError> {
        self.load_from_directory_with_extension(path, DEFAULT_EXTENSION)
    }

    /// Loads every `<holidayKey>.<extension>` file directly inside `path`.
    ///
    /// Subdirectories and files with another extension are ignored. A file whose
    /// content is not a mapping, or cannot be read or parsed, is skipped.
    /// Each remaining file replaces the translations of its key.
    ///
    /// Loading stops at the first unknown locale. Files merged before it are kept.
    ///
    /// # Errors
    /// - [`TranslationError::DirectoryNotFound`]: `path` does not exist
    /// - [`TranslationError::NotADirectory`]: `path` is not a directory
    /// - [`TranslationError::UnknownLocale`]: a file names a locale outside the locale set
    /// - [`TranslationError::Walk`]: the directory cannot be enumerated
    pub fn load_from_directory_with_extension(
        &mut self,
        path: impl AsRef<Path>,
        extension: &str,
    ) -> Result<(), TranslationError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), extension, "Loading translations");

        if !path.exists() {
            return Err(TranslationError::DirectoryNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(TranslationError::NotADirectory(path.to_path_buf()));
        }

        let mut loaded = 0_usize;

        for result in WalkBuilder::new(path)
            .standard_filters(false)
            .follow_links(true)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = result?;

            // ルート自身
            if entry.depth() == 0 {
                continue;
            }

            let file_path = entry.path();

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                tracing::trace!("Skipping non-file entry {:?}", file_path);
                continue;
            }

            if file_path.extension().and_then(OsStr::to_str) != Some(extension) {
                tracing::trace!("Skipping {:?}: extension is not '{}'", file_path, extension);
                continue;
            }

            let Some(key) = file::holiday_key(file_path) else {
                continue;
            };

            let Some(data) = file::read_data_file(file_path) else {
                continue;
            };

            let DataFile::Mapping(entries) = data else {
                tracing::warn!("Skipping {:?}: content is not a mapping", file_path);
                continue;
            };

            // null のエントリもロケールは検証する
            for locale in entries.keys() {
                self.check_locale(locale)?;
            }

            let locales = file::into_locale_map(entries);

            tracing::debug!(key, locales = locales.len(), "Loaded translations");
            self.translations.insert(key, locales);
            loaded += 1;
        }

        tracing::debug!(path = %path.display(), files = loaded, "Finished loading translations");

        Ok(())
    }

    /// Adds or overwrites the name of `key` in `locale`.
    ///
    /// # Errors
    /// [`TranslationError::UnknownLocale`] when `locale` is outside the locale set.
    pub fn add_translation(
        &mut self,
        key: impl Into<String>,
        locale: &str,
        text: impl Into<String>,
    ) -> Result<(), TranslationError> {
        self.check_locale(locale)?;

        self.translations.entry(key.into()).or_default().insert(locale.to_string(), text.into());

        Ok(())
    }

    /// Name of `key` in exactly `locale`.
    ///
    /// `None` when the key is unknown or has no entry for the locale. The locale is not validated.
    #[must_use]
    pub fn translation(&self, key: &str, locale: &str) -> Option<&str> {
        self.translations.get(key)?.get(locale).map(String::as_str)
    }

    /// Copy of all names recorded for `key`.
    #[must_use]
    pub fn translations(&self, key: &str) -> LocaleMap {
        self.translations.get(key).cloned().unwrap_or_default()
    }

    /// Holiday keys in the catalogue, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    /// Number of holiday keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    #[must_use]
    pub const fn locales(&self) -> &LocaleSet {
        &self.available_locales
    }

    /// ロケールセットに含まれるか検証する
    fn check_locale(&self, locale: &str) -> Result<(), TranslationError> {
        if self.available_locales.contains(locale) {
            Ok(())
        } else {
            Err(TranslationError::UnknownLocale(locale.to_string()))
        }
    }
}

impl Translations for TranslationCatalogue {
    fn translation(&self, key: &str, locale: &str) -> Option<&str> {
        Self::translation(self, key, locale)
    }

    fn translations(&self, key: &str) -> LocaleMap {
        Self::translations(self, key)
    }
}
