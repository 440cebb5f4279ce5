//! 設定ファイルとカタログ構築

use std::path::{
    Path,
    PathBuf,
};

use super::{
    CatalogueSettings,
    ConfigError,
};
use crate::locale::LocaleSet;
use crate::resolve;
use crate::translation::{
    TranslationCatalogue,
    Translations,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".holiday-i18n.json";

/// Validated catalogue settings and the directory they were read from.
///
/// Relative `translationsDir` values resolve against that directory.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 検証済みの設定
    settings: CatalogueSettings,

    /// `.holiday-i18n.json` を探したディレクトリ
    root: Option<PathBuf>,
}

impl ConfigManager {
    /// Default settings, no root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `settings` directly instead of reading a file.
    ///
    /// # Errors
    /// [`ConfigError::ValidationErrors`] when the settings are invalid.
    pub fn from_settings(
        settings: CatalogueSettings,
        root: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(Self { settings, root })
    }

    /// Reads `<root>/.holiday-i18n.json`, falling back to defaults when it is missing.
    ///
    /// On any error the current settings and root are kept.
    ///
    /// # Errors
    /// - I/O error reading the file
    /// - JSON parse error
    /// - validation errors
    pub fn load_settings(&mut self, root: Option<PathBuf>) -> Result<(), ConfigError> {
        let settings = match root.as_deref() {
            Some(root) => read_config_file(&root.join(CONFIG_FILE_NAME))?.unwrap_or_default(),
            None => CatalogueSettings::default(),
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!(root = ?root, settings = ?settings, "Catalogue settings loaded");
        self.settings = settings;
        self.root = root;

        Ok(())
    }

    #[must_use]
    pub const fn settings(&self) -> &CatalogueSettings {
        &self.settings
    }

    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Locales the built catalogue accepts.
    #[must_use]
    pub fn locale_set(&self) -> LocaleSet {
        self.settings.locale_set()
    }

    /// `translationsDir` resolved against the root.
    #[must_use]
    pub fn translations_dir(&self) -> Option<PathBuf> {
        self.settings.resolve_translations_dir(self.root())
    }

    /// Builds a catalogue bound to [`Self::locale_set`] and loads the translations directory.
    ///
    /// Without `translationsDir` the catalogue is empty.
    ///
    /// # Errors
    /// [`ConfigError::Translation`] when the directory is missing or a file names an unknown locale.
    pub fn build_catalogue(&self) -> Result<TranslationCatalogue, ConfigError> {
        let mut catalogue = TranslationCatalogue::with_locales(self.locale_set());

        if let Some(dir) = self.translations_dir() {
            catalogue.load_from_directory_with_extension(&dir, &self.settings.file_extension)?;
        }

        Ok(catalogue)
    }

    /// Display name of `key` for `locale`, falling back to the configured `fallbackLocale`.
    #[must_use]
    pub fn display_name(
        &self,
        translations: &impl Translations,
        key: &str,
        locale: &str,
    ) -> Option<String> {
        resolve::display_name(translations, key, locale, &self.settings.fallback_locale)
    }
}

/// `Ok(None)` when the file does not exist.
fn read_config_file(path: &Path) -> Result<Option<CatalogueSettings>, ConfigError> {
    if !path.is_file() {
        tracing::debug!("No configuration file at {:?}", path);
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}
