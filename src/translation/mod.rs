//! Holiday name translations
/// Translation catalogue
mod catalogue;
/// Catalogue errors
mod error;
/// Translation data files
pub mod file;

use std::collections::BTreeMap;

pub use catalogue::{
    DEFAULT_EXTENSION,
    TranslationCatalogue,
};
pub use error::TranslationError;

/// ロケール → 表示名のマッピング
pub type LocaleMap = BTreeMap<String, String>;

/// Read access to holiday name translations.
///
/// Calendar code that has computed a holiday date asks for its display name through this trait.
pub trait Translations {
    /// Display name for `key` in exactly `locale`, or `None` when no data exists.
    fn translation(&self, key: &str, locale: &str) -> Option<&str>;

    /// All names recorded for `key`. Unknown keys yield an empty map.
    fn translations(&self, key: &str) -> LocaleMap;
}
