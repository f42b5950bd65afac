use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::paypal_service::PaymentGateway;
use crate::services::recorder_service::CaptureRecorder;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub gateway: Arc<dyn PaymentGateway>,
    pub recorder: Arc<CaptureRecorder>,
}

impl AppState {
    pub fn new(config: AppConfig, gateway: Arc<dyn PaymentGateway>) -> Self {
        let recorder = Arc::new(CaptureRecorder::new(&config.transaction_log));
        AppState {
            config,
            gateway,
            recorder,
        }
    }
}
