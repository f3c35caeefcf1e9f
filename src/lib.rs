//! # touchd
//!
//! ファイルを作成し、既存ファイルのアクセス時刻・更新時刻を現在時刻に更新するツール
//!
//! 存在しない親ディレクトリは自動的に作成します。
//! 複数ファイルを指定した場合は全ファイルを処理し、失敗をまとめて1つのエラーとして返します。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エラー型とToucher trait（外部依存なし）
//! - **Application層**: バッチ処理のユースケース
//! - **Adapter層**: ファイルシステムとの統合、設定
//! - **Driver層**: CLI、依存性注入

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
