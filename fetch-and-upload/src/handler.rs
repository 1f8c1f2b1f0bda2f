//! Lambda entry point for API Gateway proxy events

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use http::StatusCode;
use lambda_runtime::{Error, LambdaEvent};
use tracing::instrument;

use crate::{
    relay::{FetchUploadError, ImageRelay, UploadOutcome},
    types::{json_response, AppError, FetchImageRequest, InvalidRequest},
};

/// Handles one invocation of the fetch-and-upload function
///
/// The upload is awaited: a 200 response means the object is in the bucket. Failures
/// are answered with the error envelope and a 4xx/5xx status.
///
/// # Errors
///
/// Never fails at the invocation level; every failure is mapped to a response
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    relay: &ImageRelay,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let response = match handle_request(relay, &event.payload).await {
        Ok(outcome) => json_response(StatusCode::OK, &outcome),
        Err(err) => AppError::from(err).into_response(),
    };

    Ok(response)
}

async fn handle_request(
    relay: &ImageRelay,
    request: &ApiGatewayProxyRequest,
) -> Result<UploadOutcome, FetchUploadError> {
    let body = decode_body(request)?;
    let input = FetchImageRequest::from_body(body.as_deref())?;

    tracing::info!("Fetching image from {}", input.image_url);

    relay.fetch_and_upload(&input).await
}

fn decode_body(request: &ApiGatewayProxyRequest) -> Result<Option<String>, InvalidRequest> {
    let Some(body) = request.body.as_deref() else {
        return Ok(None);
    };

    if !request.is_base64_encoded {
        return Ok(Some(body.to_string()));
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| InvalidRequest::InvalidEncoding(e.to_string()))?;

    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| InvalidRequest::InvalidEncoding(e.to_string()))
}
