//! 翻訳データファイルの読み込み

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use super::LocaleMap;

/// Locale → display name as written in a data file. `None` marks a `null` entry.
pub type FileEntries = BTreeMap<String, Option<String>>;

/// Result of reading one translation data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFile {
    /// Content is a mapping from locale to display name.
    Mapping(FileEntries),
    /// Content parsed but is not a mapping (array, string, number, ...).
    NotAMapping,
}

/// Parse translation file content.
///
/// String values are stored verbatim and `null` means "no name". Any other JSON
/// value is kept as its JSON text.
///
/// # Examples
/// ```
/// use holiday_i18n::translation::file::{DataFile, parse_data_file};
///
/// let parsed = parse_data_file(r#"{"en_US": "Easter", "nl_NL": null}"#).unwrap();
/// let DataFile::Mapping(entries) = parsed else { panic!("expected a mapping") };
/// assert_eq!(entries.get("en_US"), Some(&Some("Easter".to_string())));
/// assert_eq!(entries.get("nl_NL"), Some(&None));
/// ```
///
/// # Errors
/// Returns the JSON error when `content` is not valid JSON.
pub fn parse_data_file(content: &str) -> Result<DataFile, serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;

    let Value::Object(map) = value else {
        return Ok(DataFile::NotAMapping);
    };

    let entries = map
        .into_iter()
        .map(|(locale, value)| {
            let text = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            (locale, text)
        })
        .collect();

    Ok(DataFile::Mapping(entries))
}

/// Drops `null` entries, leaving only locales that have a name.
#[must_use]
pub fn into_locale_map(entries: FileEntries) -> LocaleMap {
    entries.into_iter().filter_map(|(locale, text)| Some((locale, text?))).collect()
}

/// Read and parse a translation file.
///
/// Unreadable or unparseable files yield `None` with a warning; the caller skips them.
pub(super) fn read_data_file(path: &Path) -> Option<DataFile> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read translation file {:?}: {}", path, e);
            return None;
        }
    };

    match parse_data_file(&content) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!("Failed to parse translation file {:?}: {}", path, e);
            None
        }
    }
}

/// Holiday key derived from a data file path (file name without extension).
///
/// Stems that are not valid UTF-8 have no key.
pub(super) fn holiday_key(path: &Path) -> Option<String> {
    let stem = path.file_stem()?;
    let Some(key) = stem.to_str() else {
        tracing::warn!("Skipping {:?}: file name is not valid UTF-8", path);
        return None;
    };
    Some(key.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::path::PathBuf;

    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn parse_entries(content: &str) -> FileEntries {
        let DataFile::Mapping(entries) = parse_data_file(content).unwrap() else {
            panic!("expected a mapping")
        };
        entries
    }

    fn name<'a>(entries: &'a FileEntries, locale: &str) -> Option<&'a str> {
        entries.get(locale)?.as_deref()
    }

    #[rstest]
    fn parse_mapping() {
        let entries = parse_entries(r#"{"en_US": "Ascension Day", "nl_NL": "Hemelvaart"}"#);

        assert_that!(entries.len(), eq(2));
        assert_that!(name(&entries, "en_US"), some(eq("Ascension Day")));
        assert_that!(name(&entries, "nl_NL"), some(eq("Hemelvaart")));
    }

    #[rstest]
    fn parse_empty_mapping() {
        let parsed = parse_data_file("{}").unwrap();

        assert_that!(parsed, eq(&DataFile::Mapping(FileEntries::new())));
    }

    #[rstest]
    #[case(r#"["en_US", "Easter"]"#)]
    #[case(r#""Easter""#)]
    #[case("42")]
    #[case("null")]
    fn parse_non_mapping(#[case] content: &str) {
        assert_that!(parse_data_file(content).unwrap(), eq(&DataFile::NotAMapping));
    }

    #[rstest]
    fn parse_non_string_values_as_json_text() {
        let entries = parse_entries(r#"{"en_US": 1, "nl_NL": true}"#);

        assert_that!(name(&entries, "en_US"), some(eq("1")));
        assert_that!(name(&entries, "nl_NL"), some(eq("true")));
    }

    #[rstest]
    fn parse_null_value_is_absent() {
        let entries = parse_entries(r#"{"en_US": "Easter", "nl_NL": null}"#);

        // ロケールは残る（検証対象）が、表示名はない
        assert_that!(entries.contains_key("nl_NL"), eq(true));
        assert_that!(name(&entries, "nl_NL"), none());

        let locales = into_locale_map(entries);
        assert_that!(locales.len(), eq(1));
        assert_that!(locales.contains_key("nl_NL"), eq(false));
    }

    #[rstest]
    fn parse_invalid_json() {
        assert_that!(parse_data_file("{ invalid"), err(anything()));
    }

    #[rstest]
    #[case("translations/easter.json", Some("easter"))]
    #[case("ascensionDay.json", Some("ascensionDay"))]
    #[case("data/new.years.json", Some("new.years"))]
    #[case("", None)]
    fn holiday_key_from_path(#[case] path: &str, #[case] expected: Option<&str>) {
        let key = holiday_key(&PathBuf::from(path));

        assert_that!(key.as_deref(), eq(expected));
    }

    #[cfg(unix)]
    #[rstest]
    fn holiday_key_rejects_non_utf8_stem() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"easter\xff.json"));

        assert_that!(holiday_key(&path), none());
    }
}
