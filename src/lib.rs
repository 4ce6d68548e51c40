//! # fogodoc
//!
//! Document generation for FOGO purchase orders.
//!
//! The crate turns a title plus a list of text lines into a minimal
//! single-page PDF, and composes the supplier notification message that
//! accompanies an order. Rendering is a pure computation over its inputs:
//! no I/O, no shared state, safe to call from any number of threads.
//!
//! ## Quick Start
//!
//! ```
//! use fogodoc::model::TextDocument;
//!
//! let mut doc = TextDocument::new("Orden de compra PO-001");
//! doc.add_line("Proveedor: Lacteos del Valle");
//! doc.add_line("Total estimado: $ 320.000,00");
//!
//! let bytes = fogodoc::render_pdf(&doc.title, &doc.lines);
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! ```
//!
//! Orders decoded from JSON can be rendered and announced in one step:
//!
//! ```no_run
//! fn main() -> fogodoc::Result<()> {
//!     let order = fogodoc::load_order("order.json")?;
//!
//!     let pdf = fogodoc::order_pdf(&order);
//!     std::fs::write("order.pdf", pdf)?;
//!
//!     let message = fogodoc::order_message(&order, "https://fogo.example/order.pdf");
//!     println!("{}", message);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod message;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use message::build_order_message;
pub use model::{
    normalize_sites, EmployeeSiteRow, OrderLine, PurchaseOrder, SiteOption, TextDocument,
};
pub use render::{sanitize, to_pdf};

use std::path::Path;

/// Load a purchase order from a JSON file.
///
/// # Example
///
/// ```no_run
/// let order = fogodoc::load_order("order.json").unwrap();
/// println!("{}", order.id);
/// ```
pub fn load_order<P: AsRef<Path>>(path: P) -> Result<PurchaseOrder> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Render a title and body lines to a single-page PDF.
///
/// Convenience wrapper over [`render::to_pdf`] for callers that have loose
/// text rather than a [`TextDocument`].
pub fn render_pdf(title: &str, lines: &[String]) -> Vec<u8> {
    let doc = TextDocument {
        title: title.to_string(),
        lines: lines.to_vec(),
    };
    render::to_pdf(&doc)
}

/// Render a purchase order to its single-page PDF.
pub fn order_pdf(order: &PurchaseOrder) -> Vec<u8> {
    render::to_pdf(&order.to_document())
}

/// Compose the supplier message for a purchase order.
pub fn order_message(order: &PurchaseOrder, pdf_url: &str) -> String {
    message::build_order_message(order, pdf_url)
}
