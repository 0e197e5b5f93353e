/// DynamoDB接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// メッセージテーブル名を指定する環境変数
pub const CONTACT_MESSAGES_TABLE_ENV: &str = "CONTACT_MESSAGES_TABLE";

/// DynamoDB設定のエラー型
#[derive(Debug, Error)]
pub enum DynamoDbConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// テーブル名とクライアントを持つDynamoDB設定
///
/// テーブル名は`CONTACT_MESSAGES_TABLE`環境変数で設定する。
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// メッセージテーブル名
    messages_table: String,
}

impl DynamoDbConfig {
    /// 環境変数からテーブル名を読み取り、AWS設定を読み込んで新しいDynamoDbConfigを作成
    ///
    /// 環境変数:
    /// - CONTACT_MESSAGES_TABLE: お問い合わせメッセージ用DynamoDBテーブル名
    /// - AWS認証情報: aws-configにより自動読み込み
    pub async fn from_env() -> Result<Self, DynamoDbConfigError> {
        // テーブル名が無ければAWS設定の読み込み前に失敗させる
        let messages_table = read_table_name()?;

        // 環境からAWS設定を読み込み（認証情報、リージョンなど）
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Ok(Self {
            client,
            messages_table,
        })
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    #[cfg(test)]
    pub fn new(client: DynamoDbClient, messages_table: String) -> Self {
        Self {
            client,
            messages_table,
        }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// メッセージテーブル名を取得
    pub fn messages_table(&self) -> &str {
        &self.messages_table
    }
}

/// 環境変数からテーブル名を読み込み（空文字は未設定扱い）
fn read_table_name() -> Result<String, DynamoDbConfigError> {
    std::env::var(CONTACT_MESSAGES_TABLE_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DynamoDbConfigError::MissingEnvVar(CONTACT_MESSAGES_TABLE_ENV.to_string()))
}
