//! Portfolio generation pipeline — orchestrates one upload end to end.
//!
//! Flow: extract text → build prompt → invoke model → validate response.
//! Each step either advances or fails the whole request; nothing is retried.
//! There is no caching either: identical resumes re-invoke the model.

use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{
    CUSTOM_INSTRUCTIONS_TEMPLATE, PORTFOLIO_PROMPT_TEMPLATE, PORTFOLIO_SYSTEM,
};
use crate::generation::response::parse_generated_site;
use crate::llm_client::LlmClient;
use crate::models::site::GeneratedSite;

/// Runs the full generation pipeline for one validated upload.
pub async fn generate_portfolio(
    llm: &LlmClient,
    file: Bytes,
    custom_instructions: Option<&str>,
) -> Result<GeneratedSite, AppError> {
    let resume_text = extract_resume_text(file).await?;
    info!(
        "Extracted {} characters of resume text",
        resume_text.len()
    );

    let prompt = build_prompt(&resume_text, custom_instructions);

    let response = llm
        .call(&prompt, PORTFOLIO_SYSTEM)
        .await
        .map_err(|e| AppError::ModelInvocation(e.to_string()))?;

    let raw = response
        .text()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::ModelInvocation("model returned no text content".to_string()))?;

    parse_generated_site(raw)
}

/// Extracts plain text from the uploaded PDF on a blocking worker thread.
///
/// Fails when the library rejects the file or when the result is
/// empty/whitespace-only, typically a scanned, image-only PDF.
async fn extract_resume_text(file: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&file))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))?
        .map_err(|e| {
            warn!("PDF text extraction failed: {e}");
            AppError::Extraction("Failed to extract text from the PDF.".to_string())
        })?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "Could not extract text from the PDF. The PDF might be empty or image-based."
                .to_string(),
        ));
    }

    Ok(text)
}

/// Builds the single prompt string: fixed template, resume text in a
/// delimited block, and the optional user instructions in a second block.
fn build_prompt(resume_text: &str, custom_instructions: Option<&str>) -> String {
    let instructions_block = match custom_instructions {
        Some(instructions) => {
            CUSTOM_INSTRUCTIONS_TEMPLATE.replace("{custom_instructions}", instructions)
        }
        None => String::new(),
    };

    PORTFOLIO_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{custom_instructions_block}", &instructions_block)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal one-page PDF with no content stream: structurally valid, but
    /// with no text to extract.
    fn blank_pdf() -> Vec<u8> {
        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>\nendobj\n",
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for object in objects {
            offsets.push(pdf.len());
            pdf.extend_from_slice(object.as_bytes());
        }

        let xref_offset = pdf.len();
        pdf.extend_from_slice(b"xref\n0 4\n0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!("trailer\n<< /Size 4 /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n")
                .as_bytes(),
        );
        pdf
    }

    #[tokio::test]
    async fn garbage_bytes_fail_with_extraction_error() {
        let err = extract_resume_text(Bytes::from_static(b"not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[tokio::test]
    async fn text_free_pdf_fails_with_extraction_error() {
        let err = extract_resume_text(Bytes::from(blank_pdf()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn prompt_embeds_resume_text_in_delimited_block() {
        let prompt = build_prompt("Jane Doe\nSoftware Engineer", None);
        assert!(prompt.contains("\"\"\"\nJane Doe\nSoftware Engineer\n\"\"\""));
        assert!(!prompt.contains("Custom Instructions from User"));
    }

    #[test]
    fn prompt_includes_instructions_block_only_when_present() {
        let prompt = build_prompt("resume text", Some("dark mode, minimalist"));
        assert!(prompt.contains("Custom Instructions from User:"));
        assert!(prompt.contains("dark mode, minimalist"));
    }

    #[test]
    fn prompt_mandates_the_three_output_keys() {
        let prompt = build_prompt("resume text", None);
        assert!(prompt.contains("\"html\""));
        assert!(prompt.contains("\"css\""));
        assert!(prompt.contains("\"js\""));
    }
}
