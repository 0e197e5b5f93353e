/// お問い合わせフォーム送信内容のデコードとバリデーション
///
/// リクエストボディ（JSON）を`SubmissionPayload`にデコードし、
/// name/email/messageの3項目が揃っていることを検証する。
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// ボディのデコードエラー
///
/// クライアント起因でも詳細は返却せず、500として扱われる。
#[derive(Debug, Error)]
pub enum PayloadError {
    /// JSONとして解釈できない、またはフィールドの型が不正
    #[error("malformed JSON body: {0}")]
    Malformed(#[from] serde_json::Error),
    /// JSONだがオブジェクトではない
    #[error("body must be a JSON object")]
    NotAnObject,
}

/// 送信内容のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 必須フィールドが欠落（未指定・null・空白のみ）
    #[error("Missing name, email, or message")]
    MissingFields {
        /// 欠落していたフィールド名（name, email, messageの順）
        fields: Vec<&'static str>,
    },
}

/// デコード直後の送信内容
///
/// 各フィールドは未指定またはnullの場合`None`となる。
/// 未知のフィールドは無視する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// バリデーション済みの送信内容（前後の空白は除去済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SubmissionPayload {
    /// リクエストボディをデコード
    ///
    /// 空（または空白のみ）のボディは全フィールド未指定として扱う。
    ///
    /// # 戻り値
    /// * 成功時は`Ok(SubmissionPayload)`
    /// * JSONオブジェクトとして解釈できない場合は`Err(PayloadError)`
    pub fn from_body(body: &[u8]) -> Result<Self, PayloadError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(PayloadError::NotAnObject);
        }

        Ok(serde_json::from_value(value)?)
    }

    /// 必須フィールドを検証し、トリム済みの送信内容を返す
    ///
    /// name/email/messageのいずれかがトリム後に空であれば
    /// `ValidationError::MissingFields`を返す。
    pub fn validate(self) -> Result<ContactSubmission, ValidationError> {
        let name = trimmed(self.name);
        let email = trimmed(self.email);
        let message = trimmed(self.message);

        let missing: Vec<&'static str> = [("name", &name), ("email", &email), ("message", &message)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        Ok(ContactSubmission {
            name,
            email,
            message,
        })
    }
}

/// Noneは空文字列、それ以外は前後の空白を除去
fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== デコード ====================

    #[test]
    fn test_from_body_full_payload() {
        let body = br#"{"name":"Jane Doe","email":"jane@example.com","message":"Hello!"}"#;

        let payload = SubmissionPayload::from_body(body).unwrap();

        assert_eq!(payload.name.as_deref(), Some("Jane Doe"));
        assert_eq!(payload.email.as_deref(), Some("jane@example.com"));
        assert_eq!(payload.message.as_deref(), Some("Hello!"));
    }

    /// 空ボディは全フィールド未指定
    #[test]
    fn test_from_body_empty_is_default() {
        assert_eq!(SubmissionPayload::from_body(b"").unwrap(), SubmissionPayload::default());
        assert_eq!(SubmissionPayload::from_body(b"  \n").unwrap(), SubmissionPayload::default());
    }

    #[test]
    fn test_from_body_null_fields_are_none() {
        let payload =
            SubmissionPayload::from_body(br#"{"name":null,"email":"a@b.com"}"#).unwrap();

        assert!(payload.name.is_none());
        assert_eq!(payload.email.as_deref(), Some("a@b.com"));
        assert!(payload.message.is_none());
    }

    #[test]
    fn test_from_body_ignores_unknown_fields() {
        let payload = SubmissionPayload::from_body(
            br#"{"name":"a","email":"b","message":"c","phone":"000"}"#,
        )
        .unwrap();

        assert_eq!(payload.name.as_deref(), Some("a"));
    }

    #[test]
    fn test_from_body_invalid_json() {
        let result = SubmissionPayload::from_body(b"{not json");
        assert!(matches!(result, Err(PayloadError::Malformed(_))));
    }

    /// 配列やスカラー値はオブジェクトではない
    #[test]
    fn test_from_body_not_an_object() {
        assert!(matches!(
            SubmissionPayload::from_body(br#"["a","b","c"]"#),
            Err(PayloadError::NotAnObject)
        ));
        assert!(matches!(
            SubmissionPayload::from_body(b"null"),
            Err(PayloadError::NotAnObject)
        ));
        assert!(matches!(
            SubmissionPayload::from_body(br#""hello""#),
            Err(PayloadError::NotAnObject)
        ));
    }

    #[test]
    fn test_from_body_non_string_field() {
        let result = SubmissionPayload::from_body(br#"{"name":42,"email":"a","message":"b"}"#);
        assert!(matches!(result, Err(PayloadError::Malformed(_))));
    }

    // ==================== バリデーション ====================

    fn payload(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> SubmissionPayload {
        SubmissionPayload {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_trims_all_fields() {
        let submission = payload(Some("  Jane Doe "), Some(" jane@example.com\n"), Some("\tHello! "))
            .validate()
            .unwrap();

        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.message, "Hello!");
    }

    #[test]
    fn test_validate_empty_name() {
        let err = payload(Some(""), Some("a@b.com"), Some("hi")).validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields { fields: vec!["name"] });
    }

    /// 空白のみのmessageも欠落扱い
    #[test]
    fn test_validate_whitespace_only_message() {
        let err = payload(Some("Jane"), Some("a@b.com"), Some("   ")).validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields { fields: vec!["message"] });
    }

    #[test]
    fn test_validate_reports_all_missing_fields_in_order() {
        let err = SubmissionPayload::default().validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["name", "email", "message"]
            }
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingFields { fields: vec!["email"] };
        assert_eq!(err.to_string(), "Missing name, email, or message");
    }
}
