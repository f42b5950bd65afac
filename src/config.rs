// config.rs
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paypal_client_id: String,
    pub paypal_client_secret: String,
    pub paypal_environment: String,
    pub currency: String,
    pub brand_name: String,
    pub transaction_log: String,
    pub port: u16,
    pub host: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let paypal_environment =
            env::var("PAYPAL_ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string());

        // Missing credentials must not kill the process: /config degrades to an
        // empty client id and order calls fail with a configuration error.
        AppConfig {
            paypal_client_id: env::var("PAYPAL_CLIENT_ID").unwrap_or_default(),
            paypal_client_secret: env::var("PAYPAL_CLIENT_SECRET").unwrap_or_default(),
            paypal_environment,
            currency: env::var("CURRENCY").unwrap_or_else(|_| "USD".to_string()),
            brand_name: env::var("BRAND_NAME").unwrap_or_else(|_| "Acme Plans".to_string()),
            transaction_log: env::var("TRANSACTION_LOG")
                .unwrap_or_else(|_| "data/transactions.ndjson".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }

    pub fn paypal_base_url(&self) -> &'static str {
        if self.is_live() {
            "https://api-m.paypal.com"
        } else {
            "https://api-m.sandbox.paypal.com"
        }
    }

    pub fn is_live(&self) -> bool {
        self.paypal_environment == "live"
    }

    pub fn has_credentials(&self) -> bool {
        !self.paypal_client_id.is_empty() && !self.paypal_client_secret.is_empty()
    }

    pub fn get_config_info(&self) -> serde_json::Value {
        serde_json::json!({
            "clientId": self.paypal_client_id,
            "currency": self.currency,
            "environment": if self.is_live() { "live" } else { "sandbox" },
        })
    }
}

#[cfg(test)]
impl AppConfig {
    pub fn for_tests() -> Self {
        AppConfig {
            paypal_client_id: "test-client-id".to_string(),
            paypal_client_secret: "test-client-secret".to_string(),
            paypal_environment: "sandbox".to_string(),
            currency: "USD".to_string(),
            brand_name: "Acme Plans".to_string(),
            transaction_log: "data/transactions.ndjson".to_string(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}
