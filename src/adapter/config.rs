//! Configuration
//!
//! タッチ処理の設定

/// Permission bits for directories created on the way to a file.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// touchd の設定
///
/// 設定ファイルは持たず、ワークフロー構築時に注入される
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Mode applied to newly created parent directories (Unix only, subject to umask)
    pub dir_mode: u32,
}

impl Config {
    pub fn new(dir_mode: u32) -> Self {
        Self { dir_mode }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DIR_MODE)
    }
}
