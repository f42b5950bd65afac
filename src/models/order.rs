// models/order.rs
use serde::{Deserialize, Serialize};

// PayPal Orders v2 wire shapes. Field names follow the gateway schema, so
// everything here serializes as-is with no renames.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitAmount {
    pub currency_code: String,
    /// Always a non-negative amount with exactly two fraction digits.
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub unit_amount: UnitAmount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountBreakdown {
    pub item_total: UnitAmount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amount {
    pub currency_code: String,
    pub value: String,
    pub breakdown: AmountBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseUnit {
    pub amount: Amount,
    pub items: Vec<NormalizedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationContext {
    pub brand_name: String,
    pub shipping_preference: String,
    pub user_action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub intent: String,
    pub purchase_units: Vec<PurchaseUnit>,
    pub application_context: ApplicationContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_id_is_omitted_when_absent() {
        let item = NormalizedItem {
            reference_id: None,
            name: "Pro".to_string(),
            quantity: "1".to_string(),
            category: "DIGITAL_GOODS".to_string(),
            unit_amount: UnitAmount {
                currency_code: "USD".to_string(),
                value: "19.00".to_string(),
            },
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("reference_id").is_none());
        assert_eq!(json["unit_amount"]["value"], "19.00");
    }
}
