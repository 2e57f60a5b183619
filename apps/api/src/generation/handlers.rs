//! Axum route handlers for the Portfolio Generation API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::generation::pipeline::generate_portfolio;
use crate::models::site::GeneratedSite;
use crate::state::AppState;

/// Maximum accepted resume size. A file of exactly this size is processed;
/// one byte more is rejected.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// POST /api/v1/portfolio/generate
///
/// Full pipeline: upload validation → text extraction → prompt → model
/// invocation → response validation. The credential precondition is checked
/// before the multipart body is touched, so a misconfigured server never
/// does extraction work.
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GeneratedSite>, AppError> {
    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Configuration(
            "Anthropic API key not configured. Please set the ANTHROPIC_API_KEY environment variable."
                .to_string(),
        )
    })?;

    let mut resume: Option<(Option<String>, Bytes)> = None;
    let mut custom_instructions: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        // Copy the name out before `bytes()`/`text()` consume the field.
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                let content_type = field.content_type().map(str::to_owned);
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?;
                resume = Some((content_type, data));
            }
            Some("customInstructions") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read custom instructions: {e}"))
                })?;
                // The UI caps this at 100 characters; the server only drops blanks.
                if !text.trim().is_empty() {
                    custom_instructions = Some(text);
                }
            }
            _ => {} // unknown fields are ignored
        }
    }

    let (content_type, data) =
        resume.ok_or_else(|| AppError::Validation("No file uploaded.".to_string()))?;

    if content_type.as_deref() != Some("application/pdf") {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF is allowed.".to_string(),
        ));
    }

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File is too large. Maximum size is 10MB.".to_string(),
        ));
    }

    info!(
        size_bytes = data.len(),
        has_instructions = custom_instructions.is_some(),
        "Generating portfolio from uploaded resume"
    );

    let site = generate_portfolio(llm, data, custom_instructions.as_deref()).await?;

    Ok(Json(site))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::MAX_UPLOAD_BYTES;
    use crate::llm_client::LlmClient;
    use crate::routes::build_router;
    use crate::state::AppState;

    const BOUNDARY: &str = "folio-test-boundary";

    fn app(with_key: bool) -> axum::Router {
        build_router(AppState {
            llm: with_key.then(|| LlmClient::new("test-key".to_string())),
        })
    }

    fn file_upload_body(content_type: &str, data: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"resume.pdf\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn text_field_body(name: &str, value: &str) -> Vec<u8> {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{name}\"\r\n\r\n\
             {value}\r\n--{BOUNDARY}--\r\n"
        )
        .into_bytes()
    }

    async fn post_multipart(app: axum::Router, body: Vec<u8>) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/portfolio/generate")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn missing_resume_field_returns_400() {
        let (status, body) =
            post_multipart(app(true), text_field_body("customInstructions", "hi")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file uploaded.");
    }

    #[tokio::test]
    async fn non_pdf_content_type_returns_400() {
        let (status, body) =
            post_multipart(app(true), file_upload_body("text/plain", b"hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid file type. Only PDF is allowed.");
    }

    #[tokio::test]
    async fn oversized_file_returns_400() {
        let data = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let (status, body) =
            post_multipart(app(true), file_upload_body("application/pdf", &data)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "File is too large. Maximum size is 10MB.");
    }

    #[tokio::test]
    async fn file_at_exactly_the_limit_is_not_rejected_for_size() {
        // 10 MiB of zeroes passes the size gate and fails later, at extraction.
        let data = vec![0u8; MAX_UPLOAD_BYTES];
        let (status, body) =
            post_multipart(app(true), file_upload_body("application/pdf", &data)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Failed to extract text from the PDF.");
    }

    #[tokio::test]
    async fn missing_api_key_returns_500_before_any_processing() {
        let (status, body) =
            post_multipart(app(false), file_upload_body("application/pdf", b"%PDF-")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("ANTHROPIC_API_KEY"));
    }
}
