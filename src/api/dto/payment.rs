use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::services::{PaymentReceipt, PaymentRequest};
use crate::utils::validate::not_blank;

/// Payment form, sent in camelCase by the client.
///
/// The client reads ids from the query string and computes the duration in
/// minutes, so ids may arrive as strings and the duration as a number.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "userId": 1,
    "stationId": 2,
    "duration": "60",
    "amount": 450.0,
    "date": "2025-02-01",
    "time": "10:00"
}))]
pub struct PaymentRequestBody {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[schema(value_type = Option<i32>)]
    #[validate(required(message = "All fields are required."))]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[schema(value_type = Option<i32>)]
    #[validate(required(message = "All fields are required."))]
    pub station_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub duration: Option<String>,
    pub amount: Option<f64>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub date: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub time: Option<String>,
}

/// Accepts `3` or `"3"`. A blank string counts as absent.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Int(i32),
        Str(String),
    }

    match Option::<IdValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdValue::Int(id)) => Ok(Some(id)),
        Some(IdValue::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IdValue::Str(s)) => s.trim().parse().map(Some).map_err(D::Error::custom),
    }
}

/// Accepts a string or a number, keeping the text as sent.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextValue {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(
        Option::<TextValue>::deserialize(deserializer)?.map(|value| match value {
            TextValue::Str(s) => s,
            TextValue::Int(n) => n.to_string(),
            TextValue::Float(n) => n.to_string(),
        }),
    )
}

impl PaymentRequestBody {
    pub fn into_request(self) -> PaymentRequest {
        PaymentRequest {
            user_id: self.user_id.unwrap_or_default(),
            station_id: self.station_id.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            amount: self.amount,
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    #[schema(example = "Payment successful")]
    pub message: String,
    #[schema(example = "0b8a3f2e-4c1d-4e5f-9a6b-7c8d9e0f1a2b")]
    pub reference: String,
    pub amount: Option<f64>,
}

impl From<PaymentReceipt> for PaymentResponse {
    fn from(receipt: PaymentReceipt) -> Self {
        Self {
            message: "Payment successful".to_string(),
            reference: receipt.reference.to_string(),
            amount: receipt.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_is_optional() {
        let body: PaymentRequestBody = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "stationId": 2,
            "duration": "30",
            "date": "2025-02-01",
            "time": "09:30"
        }))
        .unwrap();

        assert!(body.validate().is_ok());
        assert_eq!(body.into_request().amount, None);
    }

    #[test]
    fn test_accepts_string_ids_and_numeric_duration() {
        let body: PaymentRequestBody = serde_json::from_value(serde_json::json!({
            "userId": "3",
            "duration": 60,
            "stationId": "2",
            "amount": 300,
            "date": "2025-02-01",
            "time": "10:00"
        }))
        .unwrap();

        assert!(body.validate().is_ok());
        let request = body.into_request();
        assert_eq!(request.user_id, 3);
        assert_eq!(request.station_id, 2);
        assert_eq!(request.duration, "60");
        assert_eq!(request.amount, Some(300.0));
    }

    #[test]
    fn test_blank_string_id_counts_as_missing() {
        let body: PaymentRequestBody = serde_json::from_value(serde_json::json!({
            "userId": "",
            "stationId": 2,
            "duration": "30",
            "date": "2025-02-01",
            "time": "09:30"
        }))
        .unwrap();

        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let result = serde_json::from_value::<PaymentRequestBody>(serde_json::json!({
            "userId": "abc",
            "stationId": 2,
            "duration": "30",
            "date": "2025-02-01",
            "time": "09:30"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_station_required() {
        let body: PaymentRequestBody = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "duration": "30",
            "date": "2025-02-01",
            "time": "09:30"
        }))
        .unwrap();

        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("station_id"));
    }
}
