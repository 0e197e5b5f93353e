// アプリケーション層モジュール
pub mod http_response;
pub mod submission_handler;

// 再エクスポート
pub use submission_handler::{SubmissionError, SubmissionHandler};
