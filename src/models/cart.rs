// models/cart.rs
use serde::Deserialize;

/// One raw cart line as sent by the storefront: a plan or a credit top-up.
/// Semantic checks (name, price, quantity) happen in the cart service so the
/// error can point at the offending item; serde only shapes the JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItem {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub category: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_defaults_to_one() {
        let item: CartItem =
            serde_json::from_str(r#"{"name":"Startup Plan (Yearly)","price":39}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert!(item.id.is_none());
        assert!(item.category.is_none());
    }

    #[test]
    fn all_fields_deserialize() {
        let item: CartItem = serde_json::from_str(
            r#"{"id":"plan-1","name":"Pro","price":19.5,"quantity":2,"category":"DIGITAL_GOODS"}"#,
        )
        .unwrap();
        assert_eq!(item.id.as_deref(), Some("plan-1"));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.category.as_deref(), Some("DIGITAL_GOODS"));
    }
}
