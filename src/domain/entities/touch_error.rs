//! # TouchError
//!
//! 単一ファイルのタッチ処理で発生するエラー

use std::io;
use std::path::{Path, PathBuf};

/// 単一ファイルのタッチ失敗理由
///
/// I/O 由来のエラーは OS のメッセージをそのまま表示する。
/// 独自のメッセージを持つのは `IsDirectory` のみ。
#[derive(Debug, thiserror::Error)]
pub enum TouchError {
    /// 親ディレクトリの作成に失敗
    #[error(transparent)]
    DirectoryCreation(io::Error),

    /// 既存パスのオープンに失敗（存在しない場合を除く）
    #[error(transparent)]
    Open(io::Error),

    /// 空ファイルの作成に失敗
    #[error(transparent)]
    Create(io::Error),

    /// オープン済みパスのメタデータ取得に失敗
    #[error(transparent)]
    Metadata(io::Error),

    /// 対象パスがディレクトリとして存在する
    #[error("exists as directory")]
    IsDirectory,

    /// アクセス時刻・更新時刻の更新に失敗
    #[error(transparent)]
    TimestampUpdate(io::Error),
}

/// バッチ内で失敗した1パス分の記録
#[derive(Debug)]
pub struct TouchFailure {
    path: PathBuf,
    error: TouchError,
}

impl TouchFailure {
    pub fn new(path: impl Into<PathBuf>, error: TouchError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn error(&self) -> &TouchError {
        &self.error
    }
}
