//! Test doubles shared across the matching tests.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::semantic::Embedder;

/// Deterministic embedder: a 26-dim count of ASCII letters per text.
pub struct LetterEmbedder;

#[async_trait]
impl Embedder for LetterEmbedder {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, AppError> {
        Ok(texts
            .iter()
            .map(|text| {
                let mut counts = vec![0.0_f32; 26];
                for c in text.to_ascii_lowercase().bytes().filter(u8::is_ascii_lowercase) {
                    counts[usize::from(c - b'a')] += 1.0;
                }
                counts
            })
            .collect())
    }
}

pub struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    async fn embed(&self, _texts: Vec<String>) -> Result<Vec<Vec<f32>>, AppError> {
        Err(AppError::Embedding("model unavailable".to_string()))
    }
}

/// Builds a minimal valid PDF with one Helvetica text line per page.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let page_count = pages.len();
    let mut objects: Vec<String> = Vec::new();

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 4 + 2 * i)).collect();
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
        kids.join(" ")
    ));
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );
    for (i, text) in pages.iter().enumerate() {
        let content_id = 5 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>"
        ));
        let stream = format!("BT\n/F1 12 Tf\n72 720 Td\n({text}) Tj\nET\n");
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}endstream",
            stream.len()
        ));
    }

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.into_bytes()
}
