//! Supplier notification messages for purchase orders.
//!
//! The message is pasted into whatever channel the supplier is reached on,
//! so it is plain text with a link to the rendered PDF.

use crate::model::PurchaseOrder;

/// Compose the Spanish-language supplier message for an order.
///
/// Missing fields fall back to `sin fecha definida` / `pendiente` rather
/// than being omitted, so the supplier always sees the same message shape.
///
/// # Example
///
/// ```
/// use fogodoc::message::build_order_message;
/// use fogodoc::model::PurchaseOrder;
///
/// let order: PurchaseOrder = serde_json::from_str(r#"{
///     "id": "PO-1",
///     "supplier_name": "Proveedor SA",
///     "site_name": "Sede Centro"
/// }"#).unwrap();
/// let message = build_order_message(&order, "https://fogo.example/po/PO-1.pdf");
/// assert!(message.starts_with("Hola Proveedor SA,"));
/// ```
pub fn build_order_message(order: &PurchaseOrder, pdf_url: &str) -> String {
    [
        format!("Hola {},", order.supplier_name),
        format!(
            "Adjuntamos la orden de compra {} de {}.",
            order.id, order.site_name
        ),
        format!("Fecha esperada: {}.", order.expected_date_label()),
        format!("Total estimado: {}.", order.total_label()),
        String::new(),
        format!("PDF: {}", pdf_url),
        String::new(),
        "Gracias.".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderLine, PurchaseOrder};
    use chrono::NaiveDate;

    fn order() -> PurchaseOrder {
        PurchaseOrder {
            id: "PO-2026-014".to_string(),
            supplier_name: "Lacteos del Valle".to_string(),
            site_name: "Planta Norte".to_string(),
            expected_at: NaiveDate::from_ymd_opt(2026, 8, 5),
            currency: None,
            total_amount: Some(320_000.0),
            notes: None,
            lines: vec![OrderLine {
                product_name: "Leche entera".to_string(),
                quantity: 100.0,
                unit: Some("lt".to_string()),
                unit_cost: Some(3_200.0),
            }],
        }
    }

    #[test]
    fn test_full_message() {
        let message = build_order_message(&order(), "https://fogo.example/po.pdf");
        assert_eq!(
            message,
            "Hola Lacteos del Valle,\n\
             Adjuntamos la orden de compra PO-2026-014 de Planta Norte.\n\
             Fecha esperada: 5/8/2026.\n\
             Total estimado: $ 320.000,00.\n\
             \n\
             PDF: https://fogo.example/po.pdf\n\
             \n\
             Gracias."
        );
    }

    #[test]
    fn test_fallbacks_for_missing_fields() {
        let mut o = order();
        o.expected_at = None;
        o.total_amount = None;
        let message = build_order_message(&o, "https://fogo.example/po.pdf");
        assert!(message.contains("Fecha esperada: sin fecha definida."));
        assert!(message.contains("Total estimado: pendiente."));
    }
}
