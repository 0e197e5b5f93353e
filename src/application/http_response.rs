// JSONレスポンス生成
//
// 全レスポンスにCORSヘッダーとContent-Type: application/jsonを付与する。
// ボディは固定文言のみで、内部エラーの詳細は含めない。

use lambda_http::http::header::{HeaderValue, CONTENT_TYPE};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use serde_json::{json, Value};

use crate::infrastructure::CorsConfig;

/// プリフライト応答のメッセージ
pub const PREFLIGHT_MESSAGE: &str = "CORS preflight passed";

/// 保存成功時のメッセージ
pub const SAVED_MESSAGE: &str = "Message saved successfully";

/// 500応答のエラー文言
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// CORSプリフライト（OPTIONS）への200応答
pub fn preflight(cors: &CorsConfig) -> Response<Body> {
    json_response(StatusCode::OK, cors, &json!({ "message": PREFLIGHT_MESSAGE }))
}

/// メッセージ保存成功の200応答
pub fn saved(cors: &CorsConfig) -> Response<Body> {
    json_response(StatusCode::OK, cors, &json!({ "message": SAVED_MESSAGE }))
}

/// バリデーションエラーの400応答
pub fn bad_request(cors: &CorsConfig, error: &str) -> Response<Body> {
    json_response(StatusCode::BAD_REQUEST, cors, &json!({ "error": error }))
}

/// 原因を問わない500応答
pub fn internal_error(cors: &CorsConfig) -> Response<Body> {
    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        cors,
        &json!({ "error": INTERNAL_ERROR_MESSAGE }),
    )
}

fn json_response(status: StatusCode, cors: &CorsConfig, body: &Value) -> Response<Body> {
    let mut response = Response::new(Body::Text(body.to_string()));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    cors.apply(headers);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    response
}
