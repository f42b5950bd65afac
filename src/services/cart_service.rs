// services/cart_service.rs
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::cart::CartItem;
use crate::models::order::{NormalizedItem, UnitAmount};

/// Rounding rule: the price is first snapped to the nearest tenth of a cent to
/// absorb binary-float noise (5.005f64 * 100 is 500.4999...), then rounded
/// half-up to whole cents. 5.005 -> 501, 9.999 -> 1000.
pub fn to_cents(price: f64) -> i64 {
    let millis = (price * 1000.0).round() as i64;
    (millis + 5) / 10
}

/// Renders cents as a gateway-ready amount string with exactly two fraction
/// digits, e.g. 501 -> "5.01".
pub fn format_amount(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Reads an amount string back into cents. Only values produced by
/// `format_amount` are expected here; anything else is a validation bug.
pub fn parse_cents(value: &str) -> Result<i64> {
    let (dollars, fraction) = value
        .split_once('.')
        .ok_or_else(|| AppError::validation(format!("malformed amount: {}", value)))?;
    if fraction.len() != 2 {
        return Err(AppError::validation(format!("malformed amount: {}", value)));
    }
    let dollars: i64 = dollars
        .parse()
        .map_err(|_| AppError::validation(format!("malformed amount: {}", value)))?;
    let fraction: i64 = fraction
        .parse()
        .map_err(|_| AppError::validation(format!("malformed amount: {}", value)))?;
    Ok(dollars * 100 + fraction)
}

/// Validates raw cart lines and converts them into PayPal line items.
/// All-or-nothing: the first bad item fails the whole cart, identified by its
/// 1-based position and name where one exists. Input order is preserved.
pub fn normalize(config: &AppConfig, items: &[CartItem]) -> Result<Vec<NormalizedItem>> {
    if items.is_empty() {
        return Err(AppError::validation("no items to purchase"));
    }

    let mut normalized = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let position = index + 1;
        let name = item.name.trim();

        if name.is_empty() {
            return Err(AppError::validation(format!(
                "item {} has no name",
                position
            )));
        }
        if !item.price.is_finite() || item.price <= 0.0 {
            return Err(AppError::validation(format!(
                "\"{}\" (item {}) has an invalid price",
                name, position
            )));
        }
        if item.quantity <= 0 {
            return Err(AppError::validation(format!(
                "\"{}\" (item {}) has an invalid quantity",
                name, position
            )));
        }

        normalized.push(NormalizedItem {
            reference_id: item.id.clone(),
            name: name.to_string(),
            quantity: item.quantity.to_string(),
            category: item
                .category
                .clone()
                .unwrap_or_else(|| "DIGITAL_GOODS".to_string()),
            unit_amount: UnitAmount {
                currency_code: config.currency.clone(),
                value: format_amount(to_cents(item.price)),
            },
        });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, quantity: i64) -> CartItem {
        CartItem {
            id: None,
            name: name.to_string(),
            price,
            quantity,
            category: None,
        }
    }

    #[test]
    fn rounds_half_up_to_cents() {
        assert_eq!(to_cents(5.005), 501);
        assert_eq!(to_cents(9.999), 1000);
        assert_eq!(to_cents(2.675), 268);
        assert_eq!(to_cents(39.0), 3900);
        assert_eq!(to_cents(0.01), 1);
    }

    #[test]
    fn formats_with_two_fraction_digits() {
        assert_eq!(format_amount(501), "5.01");
        assert_eq!(format_amount(1000), "10.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(123456), "1234.56");
    }

    #[test]
    fn parse_cents_round_trips_formatted_values() {
        for cents in [0, 5, 99, 100, 501, 123456] {
            assert_eq!(parse_cents(&format_amount(cents)).unwrap(), cents);
        }
        assert!(parse_cents("5.1").is_err());
        assert!(parse_cents("abc").is_err());
    }

    #[test]
    fn normalize_preserves_length_order_and_amount_format() {
        let config = AppConfig::for_tests();
        let cart = vec![
            item("Startup Plan (Yearly)", 39.0, 1),
            item("Credit Top-up", 5.005, 3),
        ];

        let normalized = normalize(&config, &cart).unwrap();
        assert_eq!(normalized.len(), cart.len());
        assert_eq!(normalized[0].name, "Startup Plan (Yearly)");
        assert_eq!(normalized[0].unit_amount.value, "39.00");
        assert_eq!(normalized[1].name, "Credit Top-up");
        assert_eq!(normalized[1].unit_amount.value, "5.01");
        assert_eq!(normalized[1].quantity, "3");

        for entry in &normalized {
            let value = &entry.unit_amount.value;
            let (dollars, fraction) = value.split_once('.').unwrap();
            assert!(dollars.chars().all(|c| c.is_ascii_digit()), "{}", value);
            assert_eq!(fraction.len(), 2, "{}", value);
            assert!(fraction.chars().all(|c| c.is_ascii_digit()), "{}", value);
        }
    }

    #[test]
    fn normalize_applies_defaults() {
        let config = AppConfig::for_tests();
        let normalized = normalize(&config, &[item("Pro", 19.0, 1)]).unwrap();
        assert_eq!(normalized[0].category, "DIGITAL_GOODS");
        assert_eq!(normalized[0].unit_amount.currency_code, "USD");
        assert!(normalized[0].reference_id.is_none());
    }

    #[test]
    fn empty_cart_is_rejected() {
        let config = AppConfig::for_tests();
        let err = normalize(&config, &[]).unwrap_err();
        assert!(err.to_string().contains("no items to purchase"));
    }

    #[test]
    fn blank_name_is_rejected_with_position() {
        let config = AppConfig::for_tests();
        let cart = vec![item("Pro", 19.0, 1), item("   ", 5.0, 1)];
        let err = normalize(&config, &cart).unwrap_err();
        assert!(err.to_string().contains("item 2 has no name"));
    }

    #[test]
    fn non_positive_price_fails_whole_cart() {
        let config = AppConfig::for_tests();
        let cart = vec![item("Pro", 19.0, 1), item("Broken", 0.0, 1)];
        let err = normalize(&config, &cart).unwrap_err();
        assert!(err.to_string().contains("\"Broken\" (item 2)"));
        assert!(err.to_string().contains("invalid price"));

        let nan = vec![item("NaN", f64::NAN, 1)];
        assert!(normalize(&config, &nan).is_err());
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let config = AppConfig::for_tests();
        let cart = vec![item("Pro", 19.0, 0)];
        let err = normalize(&config, &cart).unwrap_err();
        assert!(err.to_string().contains("invalid quantity"));
    }
}
