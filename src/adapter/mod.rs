//! Adapter Layer
//!
//! 外部システム（ファイルシステム）との統合

pub mod config;
pub mod repositories;
