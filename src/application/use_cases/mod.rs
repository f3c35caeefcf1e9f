//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **TouchFilesUseCase**: 複数ファイルのタッチと失敗の集約

pub mod touch_files;
