/// お問い合わせフォーム送信HTTP Lambdaエントリポイント
///
/// API Gateway / Lambda Function URL経由のリクエストを受け取り、
/// SubmissionHandlerに委譲してJSONレスポンスを返却する。
use contact_form::application::{http_response, SubmissionHandler};
use contact_form::infrastructure::{
    init_logging, CorsConfig, DynamoDbConfig, DynamoDbConfigError, DynamoMessageRepository,
};
use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// DynamoMessageRepositoryの静的インスタンス
///
/// Lambda warm start時にクライアントを再利用するため、
/// 初回呼び出し時に一度だけ初期化して保持する。
static MESSAGE_REPO: OnceCell<DynamoMessageRepository> = OnceCell::const_new();

/// DynamoMessageRepositoryを取得（初期化されていなければ初期化）
async fn get_message_repo() -> Result<&'static DynamoMessageRepository, DynamoDbConfigError> {
    MESSAGE_REPO
        .get_or_try_init(|| async {
            let config = DynamoDbConfig::from_env().await?;
            let repo = DynamoMessageRepository::new(
                config.client().clone(),
                config.messages_table().to_string(),
            );
            info!(table = repo.table_name(), "DynamoDBクライアントを初期化");
            Ok(repo)
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("お問い合わせフォームLambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// プリフライトはストアを使わないため、リポジトリの初期化前に応答する。
/// リポジトリの初期化に失敗した場合もCORSヘッダー付きの500を返す。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let cors = CorsConfig::from_env();

    if request.method() == Method::OPTIONS {
        info!(method = %request.method(), path = request.uri().path(), "プリフライト受信");
        return Ok(http_response::preflight(&cors));
    }

    let message_repo = match get_message_repo().await {
        Ok(repo) => repo.clone(),
        Err(err) => {
            error!(error = %err, "DynamoDB設定の読み込みに失敗");
            return Ok(http_response::internal_error(&cors));
        }
    };

    let submission_handler = SubmissionHandler::new(message_repo, cors);
    Ok(submission_handler.handle(&request).await)
}
