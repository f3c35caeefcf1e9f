//! # Touch Files Use Case
//!
//! 複数ファイルのタッチユースケース

use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::batch_error::BatchTouchError;
use crate::domain::entities::touch_error::TouchFailure;
use crate::domain::repositories::toucher::Toucher;

/// 複数ファイルのタッチユースケース
///
/// 入力順に1パスずつタッチし、失敗しても残りのパスの処理を続ける。
/// 作成済みのファイルは後続の失敗でロールバックしない。
pub struct TouchFilesUseCase<T: Toucher> {
    toucher: Arc<T>,
}

impl<T: Toucher> TouchFilesUseCase<T> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `toucher` - 単一ファイルのタッチ実装
    pub fn new(toucher: Arc<T>) -> Self {
        Self { toucher }
    }

    /// 全パスをタッチする
    ///
    /// # Arguments
    ///
    /// * `paths` - 対象ファイルのパス（重複可）
    ///
    /// # Errors
    ///
    /// 1件以上失敗した場合、失敗したパスを入力順に並べた集約エラーを返す
    pub fn execute<P: AsRef<Path>>(&self, paths: &[P]) -> Result<(), BatchTouchError> {
        info!("Touching {} file(s)", paths.len());

        let mut failures = Vec::new();

        for path in paths {
            let path = path.as_ref();
            if let Err(e) = self.toucher.touch(path) {
                warn!("Failed to touch {}: {}", path.display(), e);
                failures.push(TouchFailure::new(path, e));
            }
        }

        let error = BatchTouchError::new(failures);
        if error.is_empty() {
            info!("Touched {} file(s)", paths.len());
            return Ok(());
        }

        info!(
            "Touched {} file(s) ({} failed)",
            paths.len() - error.len(),
            error.len()
        );
        Err(error)
    }
}
