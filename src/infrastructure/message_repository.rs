/// DynamoDBにお問い合わせメッセージを保存するためのリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

use crate::domain::ContactMessage;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),
}

/// メッセージ永続化用トレイト
///
/// put-item（キーによるupsert）のみを提供する。
/// 読み取り・更新・削除は行わない。
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// メッセージを1件書き込む
    ///
    /// 同じemailのレコードが既に存在する場合は上書きする（last-write-wins）。
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(RepositoryError)`
    async fn put(&self, message: &ContactMessage) -> Result<(), RepositoryError>;
}

/// MessageRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoMessageRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// メッセージテーブル名
    table_name: String,
}

impl DynamoMessageRepository {
    /// 新しいDynamoMessageRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - メッセージテーブルの名前（パーティションキー: email）
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl MessageRepository for DynamoMessageRepository {
    async fn put(&self, message: &ContactMessage) -> Result<(), RepositoryError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("email", AttributeValue::S(message.email.clone()))
            .item("name", AttributeValue::S(message.name.clone()))
            .item("message", AttributeValue::S(message.message.clone()))
            .item("timestamp", AttributeValue::S(message.timestamp.clone()))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        Ok(())
    }
}
