//! # Toucher Trait
//!
//! 単一ファイルのタッチ処理を抽象化

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::touch_error::TouchError;

/// 単一ファイルのタッチ処理
///
/// 1つのパスについて以下を保証する：
///
/// - 親ディレクトリが存在しなければ作成する
/// - ファイルが存在しなければ空の通常ファイルとして作成する
/// - ファイルが存在すればアクセス時刻・更新時刻を現在時刻に更新する
#[cfg_attr(test, automock)]
pub trait Toucher {
    /// パスをタッチする
    ///
    /// # Arguments
    ///
    /// * `path` - 対象ファイルのパス
    ///
    /// # Errors
    ///
    /// 親ディレクトリの作成、ファイルの作成・オープン、時刻の更新のいずれかに
    /// 失敗した場合、またはパスがディレクトリとして存在する場合にエラーを返す
    fn touch(&self, path: &Path) -> Result<(), TouchError>;
}
