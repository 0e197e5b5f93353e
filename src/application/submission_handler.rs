/// お問い合わせフォーム送信ハンドラー
///
/// HTTPメソッドで分岐し、OPTIONSにはCORSプリフライト応答を、
/// それ以外には送信内容の検証とメッセージの保存を行う。
use chrono::Utc;
use lambda_http::http::Method;
use lambda_http::{Body, Request, Response};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::http_response;
use crate::domain::{ContactMessage, PayloadError, SubmissionPayload, ValidationError};
use crate::infrastructure::{CorsConfig, MessageRepository, RepositoryError};

/// 送信処理のエラー型
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// ボディのデコード失敗
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),
    /// 必須フィールドの欠落
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// ストアへの書き込み失敗
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl SubmissionError {
    /// 400として呼び出し元に返すエラーか
    pub fn is_client_error(&self) -> bool {
        matches!(self, SubmissionError::Validation(_))
    }
}

/// 送信リクエストを処理するハンドラー
///
/// リクエスト間で状態を持たない。ストアはコンストラクタで注入する。
pub struct SubmissionHandler<MR>
where
    MR: MessageRepository,
{
    /// メッセージリポジトリ
    message_repo: MR,
    /// CORSヘッダー設定
    cors: CorsConfig,
}

impl<MR> SubmissionHandler<MR>
where
    MR: MessageRepository,
{
    /// 新しいSubmissionHandlerを作成
    pub fn new(message_repo: MR, cors: CorsConfig) -> Self {
        Self { message_repo, cors }
    }

    /// HTTPリクエストを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. OPTIONSならプリフライト応答（書き込みなし）
    /// 2. ボディをデコードして必須フィールドを検証
    /// 3. タイムスタンプを付与してメッセージを1件書き込み
    ///
    /// 検証エラーは400、それ以外の失敗は詳細を伏せた500に変換する。
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        info!(
            method = %request.method(),
            path = request.uri().path(),
            body_length = request.body().len(),
            "リクエスト受信"
        );

        if request.method() == Method::OPTIONS {
            return http_response::preflight(&self.cors);
        }

        match self.submit(request.body()).await {
            Ok(()) => http_response::saved(&self.cors),
            Err(err) if err.is_client_error() => {
                if let SubmissionError::Validation(ValidationError::MissingFields { fields }) = &err {
                    warn!(missing = ?fields, "必須フィールド欠落");
                }
                http_response::bad_request(&self.cors, &err.to_string())
            }
            Err(err) => {
                error!(error = %err, "送信処理に失敗");
                http_response::internal_error(&self.cors)
            }
        }
    }

    /// 送信内容を検証して保存
    ///
    /// # 戻り値
    /// * 保存成功時は`Ok(())`
    /// * 失敗時は`Err(SubmissionError)`
    pub async fn submit(&self, body: &[u8]) -> Result<(), SubmissionError> {
        let submission = SubmissionPayload::from_body(body)?.validate()?;
        let message = ContactMessage::from_submission(submission, Utc::now());

        self.message_repo.put(&message).await?;

        debug!(timestamp = %message.timestamp, "メッセージ保存");
        Ok(())
    }
}
