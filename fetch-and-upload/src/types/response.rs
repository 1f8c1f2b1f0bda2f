use aws_lambda_events::{apigw::ApiGatewayProxyResponse, encodings::Body};
use http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use serde::Serialize;

/// Builds an API Gateway proxy response with a JSON body
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> ApiGatewayProxyResponse {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize response body: {e}");
        "{}".to_string()
    });

    let mut response = ApiGatewayProxyResponse::default();
    response.status_code = i64::from(status.as_u16());
    response
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response.body = Some(Body::Text(body));
    response
}
