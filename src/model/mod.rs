//! Model types: documents, purchase orders, and site options.

mod document;
mod order;
mod site;

pub use document::TextDocument;
pub use order::{OrderLine, PurchaseOrder};
pub use site::{normalize_sites, EmployeeSiteRow, SiteOption, SiteRelation};
