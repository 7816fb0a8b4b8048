//! Payment capture stub. No gateway is contacted and nothing is persisted.

use uuid::Uuid;

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub user_id: i32,
    pub station_id: i32,
    pub duration: String,
    pub amount: Option<f64>,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub reference: Uuid,
    pub amount: Option<f64>,
}

#[derive(Clone, Default)]
pub struct PaymentService;

impl PaymentService {
    pub fn new() -> Self {
        Self
    }

    /// Acknowledges the payment with a fresh reference.
    pub async fn capture(&self, request: PaymentRequest) -> AppResult<PaymentReceipt> {
        let reference = Uuid::new_v4();
        tracing::info!(
            %reference,
            user_id = request.user_id,
            station_id = request.station_id,
            duration = %request.duration,
            amount = ?request.amount,
            date = %request.date,
            time = %request.time,
            "payment captured"
        );

        Ok(PaymentReceipt {
            reference,
            amount: request.amount,
        })
    }
}
