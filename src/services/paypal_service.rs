// services/paypal_service.rs
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as base64, Engine as _};
use reqwest::{header, Client, Method};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::order::OrderRequest;

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub expires_in: Option<u64>,
}

/// The two gateway calls the checkout flow needs. Split out as a trait so the
/// orchestrator can run against a scripted gateway in tests.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(&self, order: &OrderRequest) -> Result<Value>;
    async fn capture_order(&self, order_id: &str) -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct PayPalService {
    config: AppConfig,
    client: Client,
}

impl PayPalService {
    pub fn new(config: AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        PayPalService { config, client }
    }

    /// Client-credentials exchange against the PayPal token endpoint. No token
    /// cache: call volume is per-checkout, so each call re-authenticates.
    pub async fn get_access_token(&self) -> Result<String> {
        if !self.config.has_credentials() {
            return Err(AppError::configuration(
                "PAYPAL_CLIENT_ID and PAYPAL_CLIENT_SECRET must be set",
            ));
        }

        let auth_string = format!(
            "{}:{}",
            self.config.paypal_client_id, self.config.paypal_client_secret
        );
        let encoded_auth = base64.encode(auth_string);
        let url = format!("{}/v1/oauth2/token", self.config.paypal_base_url());

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Basic {}", encoded_auth))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!("PayPal auth failed: {} - {}", status, body);
            return Err(AppError::GatewayAuth { status, body });
        }

        let auth_response: AuthResponse = response.json().await?;
        Ok(auth_response.access_token)
    }

    /// Issues one bearer-authenticated call against the PayPal REST API.
    /// Response bodies are parsed defensively: an empty or non-JSON body
    /// becomes an empty object rather than an error.
    pub async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let access_token = self.get_access_token().await?;
        let url = format!("{}{}", self.config.paypal_base_url(), path);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(header::AUTHORIZATION, format!("Bearer {}", access_token))
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let parsed: Value = serde_json::from_str(&text).unwrap_or_else(|_| json!({}));

        if !status.is_success() {
            error!("PayPal {} {} failed: {} - {}", method, path, status, text);
            return Err(AppError::GatewayApi {
                status: status.as_u16(),
                body: parsed,
            });
        }

        Ok(parsed)
    }
}

#[async_trait]
impl PaymentGateway for PayPalService {
    async fn create_order(&self, order: &OrderRequest) -> Result<Value> {
        info!(
            "Creating PayPal order for {} item(s)",
            order.purchase_units.first().map_or(0, |u| u.items.len())
        );
        self.request(Method::POST, "/v2/checkout/orders", Some(order))
            .await
    }

    async fn capture_order(&self, order_id: &str) -> Result<Value> {
        info!("Capturing PayPal order {}", order_id);
        let path = format!("/v2/checkout/orders/{}/capture", order_id);
        self.request::<Value>(Method::POST, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_fail_before_any_network_call() {
        let mut config = AppConfig::for_tests();
        config.paypal_client_id = String::new();
        config.paypal_client_secret = String::new();

        let service = PayPalService::new(config);
        let err = service.get_access_token().await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn auth_response_tolerates_missing_expiry() {
        let auth: AuthResponse = serde_json::from_str(r#"{"access_token":"tok"}"#).unwrap();
        assert_eq!(auth.access_token, "tok");
        assert!(auth.expires_in.is_none());
    }
}
