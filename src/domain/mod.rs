//! # Domain Layer
//!
//! このモジュールはタッチ処理の核心的なルールとエラー型を定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - ファイルシステムの実装について何も知らない
//!
//! ## 構成要素
//!
//! - **entities**: エラー型と失敗記録（TouchError, BatchTouchErrorなど）
//! - **repositories**: Toucher trait（インターフェース定義のみ）

pub mod entities;
pub mod repositories;
