// 永続化されるお問い合わせメッセージ
//
// バリデーション済みの送信内容にサーバー側で生成した
// UTCタイムスタンプを付与したレコード。書き込み後は変更しない。

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::ContactSubmission;

/// お問い合わせメッセージ
///
/// `email`がストアのキーとなる。同一emailの既存レコードは上書きされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    /// 送信者メールアドレス（パーティションキー）
    pub email: String,
    /// 送信者名
    pub name: String,
    /// 本文
    pub message: String,
    /// 受付時刻（ISO-8601 UTC、マイクロ秒精度）
    pub timestamp: String,
}

impl ContactMessage {
    /// 送信内容と受付時刻からメッセージを作成
    pub fn from_submission(submission: ContactSubmission, received_at: DateTime<Utc>) -> Self {
        Self {
            email: submission.email,
            name: submission.name,
            message: submission.message,
            timestamp: format_timestamp(received_at),
        }
    }
}

/// タイムスタンプをRFC 3339形式（末尾Z）に整形
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
