//! Rendering module: PDF output and content-stream text sanitization.

mod pdf;
mod sanitize;

pub use pdf::to_pdf;
pub use sanitize::sanitize;
