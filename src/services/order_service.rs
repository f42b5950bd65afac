// services/order_service.rs
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::order::{
    Amount, AmountBreakdown, ApplicationContext, NormalizedItem, OrderRequest, PurchaseUnit,
    UnitAmount,
};
use crate::services::cart_service::{format_amount, parse_cents};

/// Wraps normalized line items into a full create-order payload. The order
/// total and the item_total breakdown are written from the same sum: the
/// gateway rejects the order if they ever disagree, so any future tax or
/// discount line must adjust both.
pub fn build_order_request(
    config: &AppConfig,
    items: Vec<NormalizedItem>,
) -> Result<OrderRequest> {
    let mut total_cents: i64 = 0;
    for item in &items {
        let quantity: i64 = item.quantity.parse().map_err(|_| {
            AppError::validation(format!("malformed quantity: {}", item.quantity))
        })?;
        total_cents += parse_cents(&item.unit_amount.value)? * quantity;
    }
    let total = format_amount(total_cents);

    let amount = Amount {
        currency_code: config.currency.clone(),
        value: total.clone(),
        breakdown: AmountBreakdown {
            item_total: UnitAmount {
                currency_code: config.currency.clone(),
                value: total,
            },
        },
    };

    Ok(OrderRequest {
        intent: "CAPTURE".to_string(),
        purchase_units: vec![PurchaseUnit { amount, items }],
        application_context: ApplicationContext {
            brand_name: config.brand_name.clone(),
            shipping_preference: "NO_SHIPPING".to_string(),
            user_action: "PAY_NOW".to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::CartItem;
    use crate::services::cart_service::normalize;

    fn normalized(cart: &[(&str, f64, i64)]) -> Vec<NormalizedItem> {
        let config = AppConfig::for_tests();
        let items: Vec<CartItem> = cart
            .iter()
            .map(|(name, price, quantity)| CartItem {
                id: None,
                name: name.to_string(),
                price: *price,
                quantity: *quantity,
                category: None,
            })
            .collect();
        normalize(&config, &items).unwrap()
    }

    #[test]
    fn amount_always_equals_item_total() {
        let config = AppConfig::for_tests();
        let carts: Vec<Vec<(&str, f64, i64)>> = vec![
            vec![("Startup Plan (Yearly)", 39.0, 1)],
            vec![("A", 10.0, 2), ("B", 5.005, 1)],
            vec![("X", 0.01, 7), ("Y", 99.99, 3), ("Z", 1.0, 1)],
        ];

        for cart in carts {
            let request = build_order_request(&config, normalized(&cart)).unwrap();
            let unit = &request.purchase_units[0];
            assert_eq!(unit.amount.value, unit.amount.breakdown.item_total.value);
        }
    }

    #[test]
    fn total_sums_unit_amounts_times_quantity() {
        let config = AppConfig::for_tests();
        let request =
            build_order_request(&config, normalized(&[("A", 10.0, 2), ("B", 5.005, 1)])).unwrap();
        assert_eq!(request.purchase_units[0].amount.value, "25.01");
    }

    #[test]
    fn request_carries_capture_intent_and_context() {
        let config = AppConfig::for_tests();
        let request =
            build_order_request(&config, normalized(&[("Startup Plan (Yearly)", 39.0, 1)]))
                .unwrap();
        assert_eq!(request.intent, "CAPTURE");
        assert_eq!(request.purchase_units.len(), 1);
        assert_eq!(request.purchase_units[0].amount.value, "39.00");
        assert_eq!(request.application_context.shipping_preference, "NO_SHIPPING");
        assert_eq!(request.application_context.user_action, "PAY_NOW");
        assert_eq!(request.application_context.brand_name, "Acme Plans");
    }

    #[test]
    fn items_survive_in_input_order() {
        let config = AppConfig::for_tests();
        let request =
            build_order_request(&config, normalized(&[("First", 1.0, 1), ("Second", 2.0, 1)]))
                .unwrap();
        let items = &request.purchase_units[0].items;
        assert_eq!(items[0].name, "First");
        assert_eq!(items[1].name, "Second");
    }
}
