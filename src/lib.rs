//! holiday-i18n
//!
//! 祝日名の翻訳カタログ。祝日キーごとのデータファイルを読み込み、ロケール別の表示名を返す。

pub mod config;
pub mod locale;
pub mod resolve;
pub mod translation;

mod test_utils;

pub use locale::LocaleSet;
pub use translation::{
    LocaleMap,
    TranslationCatalogue,
    TranslationError,
    Translations,
};
