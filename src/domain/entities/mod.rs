//! # Domain Entities
//!
//! タッチ処理の結果を表す値を定義するモジュール
//!
//! ## エンティティ
//!
//! - **TouchError / TouchFailure**: 単一パスの失敗理由と失敗記録
//! - **BatchTouchError**: バッチ全体の集約エラー

pub mod batch_error;
pub mod touch_error;
