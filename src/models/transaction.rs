// models/transaction.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable view over a raw capture payload. Every field is optional because the
/// gateway omits structure depending on capture status (a DECLINED capture
/// carries less than a COMPLETED one).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureSummary {
    pub order_id: Option<String>,
    pub capture_id: Option<String>,
    pub status: Option<String>,
    pub payer_email: Option<String>,
    pub payer_given_name: Option<String>,
    pub payer_surname: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub items: Option<Value>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

/// One line of the append-only transaction log. Written once, never rewritten.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(flatten)]
    pub summary: CaptureSummary,
    pub logged_at: DateTime<Utc>,
    pub raw: Value,
}
