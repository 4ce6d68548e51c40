//! Minimal single-page PDF writer.
//!
//! Produces a five-object PDF 1.4 document: catalog, page tree, one page,
//! one content stream, and a built-in Helvetica font. Text is laid out
//! top-to-bottom on a fixed grid; lines that fall past the bottom of the
//! page are dropped silently, so output is always exactly one page.

use crate::model::TextDocument;

use super::sanitize;

/// Page size in PDF units (A4).
const PAGE_WIDTH: u32 = 595;
const PAGE_HEIGHT: u32 = 842;

/// Left margin and font size of the text grid.
const MARGIN_X: u32 = 50;
const FONT_SIZE: u32 = 11;

/// Vertical cursor: first baseline, step per line, lowest usable baseline.
const TOP_Y: i32 = 800;
const LINE_STEP: i32 = 16;
const BOTTOM_Y: i32 = 70;

/// Render a document to a complete PDF byte stream.
///
/// The content stream holds the sanitized title, a blank separator line,
/// then each document line in order. Pure computation over the input, no
/// I/O; the function cannot fail.
///
/// # Example
///
/// ```
/// use fogodoc::model::TextDocument;
/// use fogodoc::render::to_pdf;
///
/// let mut doc = TextDocument::new("Orden de compra PO-001");
/// doc.add_line("Proveedor: Lacteos del Valle");
/// let bytes = to_pdf(&doc);
/// assert!(bytes.starts_with(b"%PDF-1.4"));
/// ```
pub fn to_pdf(doc: &TextDocument) -> Vec<u8> {
    let stream = content_stream(&doc.title, &doc.lines);

    let objects = [
        "1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj".to_string(),
        "2 0 obj << /Type /Pages /Kids [3 0 R] /Count 1 >> endobj".to_string(),
        format!(
            "3 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >> endobj",
            PAGE_WIDTH, PAGE_HEIGHT
        ),
        format!(
            "4 0 obj << /Length {} >> stream\n{}\nendstream endobj",
            stream.len(),
            stream
        ),
        "5 0 obj << /Type /Font /Subtype /Type1 /BaseFont /Helvetica >> endobj".to_string(),
    ];

    // The content stream is printable ASCII by construction, so a String
    // buffer is byte-exact and offsets can be taken from its length.
    let mut buf = String::from("%PDF-1.4\n");

    // Index 0 is the conventional free-list head entry.
    let mut offsets: Vec<usize> = Vec::with_capacity(objects.len() + 1);
    offsets.push(0);
    for obj in &objects {
        offsets.push(buf.len());
        buf.push_str(obj);
        buf.push('\n');
    }

    let xref_start = buf.len();
    buf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    buf.push_str("0000000000 65535 f \n");
    for offset in &offsets[1..] {
        buf.push_str(&format!("{:010} 00000 n \n", offset));
    }

    buf.push_str(&format!(
        "trailer << /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF",
        objects.len() + 1,
        xref_start
    ));

    buf.into_bytes()
}

/// Build the page content stream: one text operator per line, stepping the
/// baseline down from [`TOP_Y`] until the page is full.
fn content_stream(title: &str, lines: &[String]) -> String {
    let mut commands = Vec::with_capacity(lines.len() + 2);
    let mut y = TOP_Y;
    let mut dropped = 0usize;

    let all = std::iter::once(title)
        .chain(std::iter::once(""))
        .chain(lines.iter().map(String::as_str));
    for line in all {
        if y < BOTTOM_Y {
            dropped += 1;
            continue;
        }
        commands.push(format!(
            "BT /F1 {} Tf {} {} Td ({}) Tj ET",
            FONT_SIZE,
            MARGIN_X,
            y,
            sanitize(line)
        ));
        y -= LINE_STEP;
    }

    if dropped > 0 {
        log::debug!("page full, dropped {} trailing lines", dropped);
    }
    commands.join("\n")
}
