// CORS設定
//
// 環境変数からCORSレスポンスヘッダーの値を読み込み、
// 全レスポンスに付与するヘッダーセットとして提供する。

use lambda_http::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use tracing::warn;

/// Access-Control-Allow-Originのデフォルト値
pub const DEFAULT_ALLOW_ORIGIN: &str = "*";

/// Access-Control-Allow-Methods（固定）
pub const ALLOW_METHODS: &str = "POST,OPTIONS";

/// Access-Control-Allow-Headersのデフォルト値
pub const DEFAULT_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// CORSヘッダー設定
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    /// 許可オリジン (CORS_ALLOW_ORIGIN環境変数)
    allow_origin: HeaderValue,
    /// 許可リクエストヘッダー (CORS_ALLOW_HEADERS環境変数、カンマ区切り)
    allow_headers: HeaderValue,
}

impl CorsConfig {
    /// 環境変数から設定を読み込み
    ///
    /// - CORS_ALLOW_ORIGIN: 許可オリジン（デフォルト: `*`）
    /// - CORS_ALLOW_HEADERS: 許可ヘッダー（デフォルト: Content-Type等の明示リスト）
    ///
    /// 未設定・空文字・ヘッダー値として不正な値はデフォルトにフォールバックする。
    pub fn from_env() -> Self {
        Self {
            allow_origin: header_from_env("CORS_ALLOW_ORIGIN", DEFAULT_ALLOW_ORIGIN),
            allow_headers: header_from_env("CORS_ALLOW_HEADERS", DEFAULT_ALLOW_HEADERS),
        }
    }

    /// 明示的な値で作成（テスト用）
    #[cfg(test)]
    pub fn new(allow_origin: HeaderValue, allow_headers: HeaderValue) -> Self {
        Self {
            allow_origin,
            allow_headers,
        }
    }

    pub fn allow_origin(&self) -> &HeaderValue {
        &self.allow_origin
    }

    pub fn allow_headers(&self) -> &HeaderValue {
        &self.allow_headers
    }

    /// CORSヘッダー3種をHeaderMapに設定
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static(DEFAULT_ALLOW_ORIGIN),
            allow_headers: HeaderValue::from_static(DEFAULT_ALLOW_HEADERS),
        }
    }
}

/// 環境変数をヘッダー値として読み込む
fn header_from_env(key: &str, default: &'static str) -> HeaderValue {
    let Some(raw) = std::env::var(key).ok().filter(|s| !s.trim().is_empty()) else {
        return HeaderValue::from_static(default);
    };

    match HeaderValue::from_str(raw.trim()) {
        Ok(value) => value,
        Err(_) => {
            warn!(env = key, value = %raw, "ヘッダー値として不正なためデフォルトを使用");
            HeaderValue::from_static(default)
        }
    }
}
