//! 翻訳カタログのエラー型

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while populating a translation catalogue
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The translations directory does not exist
    #[error("Directory with translations not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    /// The translations path exists but is not a directory
    #[error("Translations path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// A locale outside the configured locale set was written
    #[error("Locale \"{0}\" is not a valid locale.")]
    UnknownLocale(String),
    /// Error when failing to enumerate the translations directory
    #[error("Failed to read translations directory: {0}")]
    Walk(#[from] ignore::Error),
    /// Other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranslationError {
    /// Returns the offending locale for [`TranslationError::UnknownLocale`].
    #[must_use]
    pub fn unknown_locale(&self) -> Option<&str> {
        match self {
            Self::UnknownLocale(locale) => Some(locale),
            _ => None,
        }
    }
}
