//! Purchase-order types and their document layout.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::TextDocument;

/// A purchase order as stored by the orders tables.
///
/// `expected_at` is a plain calendar date; `total_amount` and `currency` are
/// optional until the order is costed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Order identifier shown to suppliers (e.g. "PO-2026-014").
    pub id: String,

    /// Supplier display name.
    pub supplier_name: String,

    /// Site the order ships to.
    pub site_name: String,

    /// Expected delivery date, if agreed.
    #[serde(default)]
    pub expected_at: Option<NaiveDate>,

    /// ISO currency code; COP when absent.
    #[serde(default)]
    pub currency: Option<String>,

    /// Estimated total, if costed.
    #[serde(default)]
    pub total_amount: Option<f64>,

    /// Free-form order notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Ordered line items.
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

/// One product line of a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product display name.
    pub product_name: String,

    /// Ordered quantity.
    pub quantity: f64,

    /// Unit of measure (e.g. "kg", "und").
    #[serde(default)]
    pub unit: Option<String>,

    /// Agreed cost per unit, if known.
    #[serde(default)]
    pub unit_cost: Option<f64>,
}

impl PurchaseOrder {
    /// Expected delivery date as shown to suppliers: `d/m/Y`, or the
    /// `sin fecha definida` fallback when no date is set.
    pub fn expected_date_label(&self) -> String {
        match self.expected_at {
            Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
            None => "sin fecha definida".to_string(),
        }
    }

    /// Estimated total as shown to suppliers, or `pendiente` when the order
    /// has not been costed.
    pub fn total_label(&self) -> String {
        match self.total_amount {
            Some(amount) => format_currency(amount, self.currency.as_deref()),
            None => "pendiente".to_string(),
        }
    }

    /// Lay the order out as a printable document.
    pub fn to_document(&self) -> TextDocument {
        let mut doc = TextDocument::new(format!("Orden de compra {}", self.id));
        doc.add_line(format!("Proveedor: {}", self.supplier_name));
        doc.add_line(format!("Sede: {}", self.site_name));
        doc.add_line(format!("Fecha esperada: {}", self.expected_date_label()));
        doc.add_blank();

        if !self.lines.is_empty() {
            doc.add_line("Productos:");
            for line in &self.lines {
                doc.add_line(line.describe());
            }
            doc.add_blank();
        }

        doc.add_line(format!("Total estimado: {}", self.total_label()));

        if let Some(notes) = self.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            doc.add_blank();
            doc.add_line(format!("Notas: {}", notes));
        }
        doc
    }
}

impl OrderLine {
    /// One-line description: quantity, unit when present, product name.
    pub fn describe(&self) -> String {
        match self.unit.as_deref() {
            Some(unit) if !unit.is_empty() => {
                format!("- {} {} {}", trim_quantity(self.quantity), unit, self.product_name)
            }
            _ => format!("- {} {}", trim_quantity(self.quantity), self.product_name),
        }
    }
}

/// Quantities are entered as decimals but most are whole; drop a zero
/// fraction, keep up to two decimals otherwise.
fn trim_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{:.2}", quantity)
    }
}

/// Render an amount the way es-CO currency output reads: `.` thousands
/// grouping, `,` decimal separator, two decimals, `$` for COP (the default
/// currency), the ISO code as prefix otherwise.
fn format_currency(amount: f64, currency: Option<&str>) -> String {
    let code = currency.unwrap_or("COP");
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let prefix = if code == "COP" { "$" } else { code };
    let sign = if negative { "-" } else { "" };
    format!("{} {}{},{:02}", prefix, sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> PurchaseOrder {
        PurchaseOrder {
            id: "PO-2026-014".to_string(),
            supplier_name: "Lacteos del Valle".to_string(),
            site_name: "Planta Norte".to_string(),
            expected_at: NaiveDate::from_ymd_opt(2026, 8, 5),
            currency: None,
            total_amount: Some(1_234_567.89),
            notes: None,
            lines: vec![
                OrderLine {
                    product_name: "Leche entera".to_string(),
                    quantity: 40.0,
                    unit: Some("lt".to_string()),
                    unit_cost: Some(3_200.0),
                },
                OrderLine {
                    product_name: "Cuajo".to_string(),
                    quantity: 2.5,
                    unit: Some("kg".to_string()),
                    unit_cost: None,
                },
            ],
        }
    }

    #[test]
    fn test_labels() {
        let o = order();
        assert_eq!(o.expected_date_label(), "5/8/2026");
        assert_eq!(o.total_label(), "$ 1.234.567,89");
    }

    #[test]
    fn test_label_fallbacks() {
        let mut o = order();
        o.expected_at = None;
        o.total_amount = None;
        assert_eq!(o.expected_date_label(), "sin fecha definida");
        assert_eq!(o.total_label(), "pendiente");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, None), "$ 0,00");
        assert_eq!(format_currency(950.5, None), "$ 950,50");
        assert_eq!(format_currency(1_000.0, None), "$ 1.000,00");
        assert_eq!(format_currency(1_234_567.89, None), "$ 1.234.567,89");
        assert_eq!(format_currency(-45.25, None), "$ -45,25");
        assert_eq!(format_currency(12.0, Some("USD")), "USD 12,00");
    }

    #[test]
    fn test_to_document_layout() {
        let doc = order().to_document();
        assert_eq!(doc.title, "Orden de compra PO-2026-014");
        assert_eq!(
            doc.lines,
            vec![
                "Proveedor: Lacteos del Valle".to_string(),
                "Sede: Planta Norte".to_string(),
                "Fecha esperada: 5/8/2026".to_string(),
                String::new(),
                "Productos:".to_string(),
                "- 40 lt Leche entera".to_string(),
                "- 2.50 kg Cuajo".to_string(),
                String::new(),
                "Total estimado: $ 1.234.567,89".to_string(),
            ]
        );
    }

    #[test]
    fn test_to_document_with_notes_and_no_lines() {
        let mut o = order();
        o.lines.clear();
        o.notes = Some("Entregar antes de las 7 am".to_string());
        let doc = o.to_document();
        assert!(doc.lines.contains(&"Notas: Entregar antes de las 7 am".to_string()));
        assert!(!doc.lines.contains(&"Productos:".to_string()));
    }

    #[test]
    fn test_order_json_round_trip() {
        let json = r#"{
            "id": "PO-1",
            "supplier_name": "Proveedor SA",
            "site_name": "Sede Centro",
            "expected_at": "2026-09-01",
            "lines": [
                { "product_name": "Harina", "quantity": 10, "unit": "kg" }
            ]
        }"#;
        let o: PurchaseOrder = serde_json::from_str(json).unwrap();
        assert_eq!(o.expected_at, NaiveDate::from_ymd_opt(2026, 9, 1));
        assert_eq!(o.total_amount, None);
        assert_eq!(o.lines.len(), 1);
        assert_eq!(o.lines[0].describe(), "- 10 kg Harina");
    }
}
