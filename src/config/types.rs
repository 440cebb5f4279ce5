use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::LocaleSet;
use crate::translation::{
    DEFAULT_EXTENSION,
    TranslationError,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "availableLocales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to load translations: {0}")]
    Translation(#[from] TranslationError),
}

/// バリデーションエラーを番号付きで整形する
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogueSettings {
    /// Directory holding `<holidayKey>.<fileExtension>` files.
    /// Relative paths are resolved against the configuration root.
    /// If unset, the catalogue starts empty.
    pub translations_dir: Option<String>,

    /// Extension of translation data files, without the leading dot.
    pub file_extension: String,

    /// Locales accepted by the catalogue.
    ///
    /// - `None`: built-in locale table (default)
    /// - `Some([...])`: only the listed locales
    pub available_locales: Option<Vec<String>>,

    /// Locale used when neither the requested locale nor its language has a name.
    pub fallback_locale: String,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            translations_dir: None,
            file_extension: DEFAULT_EXTENSION.to_string(),
            available_locales: None,
            fallback_locale: "en".to_string(),
        }
    }
}

impl CatalogueSettings {
    /// Locale set the catalogue is bound to.
    #[must_use]
    pub fn locale_set(&self) -> LocaleSet {
        self.available_locales
            .as_ref()
            .map_or_else(LocaleSet::builtin, |locales| LocaleSet::new(locales.iter().cloned()))
    }

    /// Translations directory resolved against `root`.
    #[must_use]
    pub fn resolve_translations_dir(&self, root: Option<&Path>) -> Option<PathBuf> {
        let dir = Path::new(self.translations_dir.as_deref()?);
        match root {
            Some(root) if dir.is_relative() => Some(root.join(dir)),
            _ => Some(dir.to_path_buf()),
        }
    }

    /// # Errors
    /// - Empty or dotted file extension
    /// - Empty translations directory
    /// - Empty locale entry
    /// - Fallback locale outside the locale set
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.file_extension.is_empty() {
            errors.push(ValidationError::new(
                "fileExtension",
                "The extension cannot be empty. Example: \"json\"",
            ));
        } else if self.file_extension.starts_with('.') {
            errors.push(ValidationError::new(
                "fileExtension",
                format!(
                    "Specify the extension without a leading dot: \"{}\"",
                    self.file_extension.trim_start_matches('.')
                ),
            ));
        }

        if let Some(dir) = &self.translations_dir
            && dir.is_empty()
        {
            errors.push(ValidationError::new(
                "translationsDir",
                "The directory cannot be empty. Please specify a path, or remove this field",
            ));
        }

        if let Some(locales) = &self.available_locales {
            for (index, locale) in locales.iter().enumerate() {
                if locale.trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("availableLocales[{index}]"),
                        "The locale cannot be empty. Example: \"en_US\"",
                    ));
                }
            }
        }

        if !self.locale_set().contains(&self.fallback_locale) {
            errors.push(ValidationError::new(
                "fallbackLocale",
                format!("Locale \"{}\" is not one of the available locales", self.fallback_locale),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = CatalogueSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"translationsDir": "data/translations"}"#;

        let settings: CatalogueSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.file_extension, eq("json"));
        assert_that!(settings.fallback_locale, eq("en"));
        assert_that!(settings.translations_dir, some(eq("data/translations")));
        assert!(settings.available_locales.is_none());
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: CatalogueSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings, eq(&CatalogueSettings::default()));
    }

    #[rstest]
    fn locale_set_defaults_to_builtin() {
        let settings = CatalogueSettings::default();

        assert_that!(settings.locale_set(), eq(&LocaleSet::builtin()));
    }

    #[rstest]
    fn locale_set_from_available_locales() {
        let settings = CatalogueSettings {
            available_locales: Some(vec!["en_US".to_string(), "nl_NL".to_string()]),
            ..CatalogueSettings::default()
        };

        let locales = settings.locale_set();

        assert_that!(locales.len(), eq(2));
        assert_that!(locales.contains("nl_NL"), eq(true));
        assert_that!(locales.contains("fr_FR"), eq(false));
    }

    #[rstest]
    #[case(Some("translations"), Some("/root"), Some("/root/translations"))]
    #[case(Some("/abs/translations"), Some("/root"), Some("/abs/translations"))]
    #[case(Some("translations"), None, Some("translations"))]
    #[case(None, Some("/root"), None)]
    fn resolve_translations_dir(
        #[case] dir: Option<&str>,
        #[case] root: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let settings = CatalogueSettings {
            translations_dir: dir.map(str::to_string),
            ..CatalogueSettings::default()
        };

        let resolved = settings.resolve_translations_dir(root.map(Path::new));

        assert_that!(resolved, eq(&expected.map(PathBuf::from)));
    }

    #[rstest]
    fn validate_invalid_file_extension_empty() {
        let settings =
            CatalogueSettings { file_extension: String::new(), ..CatalogueSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("fileExtension")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_file_extension_dotted() {
        let settings =
            CatalogueSettings { file_extension: ".json".to_string(), ..CatalogueSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("fileExtension")),
                field!(ValidationError.message, contains_substring("\"json\""))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_translations_dir_empty() {
        let settings = CatalogueSettings {
            translations_dir: Some(String::new()),
            ..CatalogueSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("translationsDir"))])
        );
    }

    #[rstest]
    fn validate_invalid_available_locale_empty() {
        let settings = CatalogueSettings {
            available_locales: Some(vec!["en".to_string(), " ".to_string()]),
            ..CatalogueSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("availableLocales[1]")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_fallback_locale_not_available() {
        let settings = CatalogueSettings {
            available_locales: Some(vec!["nl_NL".to_string()]),
            ..CatalogueSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("fallbackLocale")),
                field!(ValidationError.message, contains_substring("\"en\""))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = CatalogueSettings {
            file_extension: String::new(),
            fallback_locale: "xx_XX".to_string(),
            ..CatalogueSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. fileExtension"));
        assert_that!(error_message, contains_substring("2. fallbackLocale"));
        assert_that!(error_message, contains_substring("xx_XX"));
    }
}
