// services/recorder_service.rs
use chrono::Utc;
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};

use crate::errors::Result;
use crate::models::transaction::{CaptureSummary, TransactionRecord};

/// Owns all writes to the append-only transaction log. One NDJSON line per
/// captured order.
pub struct CaptureRecorder {
    path: PathBuf,
}

fn text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

impl CaptureRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CaptureRecorder { path: path.into() }
    }

    /// Total extraction: capture payload shape varies by status, so every
    /// lookup tolerates missing structure and yields None instead of failing.
    pub fn summarize(raw: &Value) -> CaptureSummary {
        let capture = raw.pointer("/purchase_units/0/payments/captures/0");

        CaptureSummary {
            order_id: text(raw.get("id")),
            capture_id: text(capture.and_then(|c| c.get("id"))),
            status: text(capture.and_then(|c| c.get("status"))),
            payer_email: text(raw.pointer("/payer/email_address")),
            payer_given_name: text(raw.pointer("/payer/name/given_name")),
            payer_surname: text(raw.pointer("/payer/name/surname")),
            amount: text(capture.and_then(|c| c.pointer("/amount/value"))),
            currency: text(capture.and_then(|c| c.pointer("/amount/currency_code"))),
            items: raw.pointer("/purchase_units/0/items").cloned(),
            create_time: text(capture.and_then(|c| c.get("create_time"))),
            update_time: text(capture.and_then(|c| c.get("update_time"))),
        }
    }

    pub async fn persist(&self, raw: &Value) -> Result<()> {
        let record = TransactionRecord {
            summary: Self::summarize(raw),
            logged_at: Utc::now(),
            raw: raw.clone(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        // One write per record: concurrent captures append whole lines.
        file.write_all(line.as_bytes()).await?;
        Ok(())
    }

    /// Best-effort logging. A capture that already charged the payer must
    /// never be reported as failed because the audit log was unwritable.
    pub async fn record(&self, raw: &Value) {
        match self.persist(raw).await {
            Ok(()) => info!("Transaction record appended to {}", self.path.display()),
            Err(e) => error!("Failed to persist transaction record: {}", e),
        }
    }
}
