//! # BatchTouchError
//!
//! バッチ処理で失敗したパスを集約するエラー

use std::path::Path;

use super::touch_error::TouchFailure;

/// 集約エラー
///
/// 失敗したパスを入力順に保持する。失敗が1件以上ある場合にのみ生成される。
///
/// # 例
///
/// ```
/// use touchd::domain::entities::batch_error::BatchTouchError;
/// use touchd::domain::entities::touch_error::{TouchError, TouchFailure};
///
/// let err = BatchTouchError::new(vec![TouchFailure::new("a", TouchError::IsDirectory)]);
/// assert_eq!(err.to_string(), "failed to touch file: [a: exists as directory]");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("failed to touch {}: {}", noun(.failures.len()), entries(.failures))]
pub struct BatchTouchError {
    failures: Vec<TouchFailure>,
}

fn noun(count: usize) -> &'static str {
    if count > 1 {
        "files"
    } else {
        "file"
    }
}

fn entries(failures: &[TouchFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("[{}: {}]", f.path().display(), f.error()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl BatchTouchError {
    pub fn new(failures: Vec<TouchFailure>) -> Self {
        Self { failures }
    }

    /// 失敗記録（入力順）
    pub fn failures(&self) -> &[TouchFailure] {
        &self.failures
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// 失敗したパスの一覧
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.failures.iter().map(TouchFailure::path)
    }
}
