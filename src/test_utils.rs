//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

/// 翻訳ファイルを含む一時ディレクトリを作成する
///
/// # Arguments
/// * `files` - ファイル名と内容のペア（例: `("easter.json", r#"{"en": "Easter"}"#)`）
///
/// # Returns
/// 作成された一時ディレクトリ（drop 時に削除される）
pub(crate) fn create_translations_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}
