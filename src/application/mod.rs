//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のtraitとエラー型を組み合わせてビジネスフローを実現
//! - Toucher traitに依存（実装には依存しない）
//! - ファイルシステムの詳細は知らない
//!
//! ## 構成要素
//!
//! - **use_cases**: ユースケース

pub mod use_cases;
