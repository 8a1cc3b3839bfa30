//! Payment Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
}

/// Payment entity
///
/// Linked to a booking by its human-readable booking code, not by the
/// numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub booking_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub method: String,
    pub status: PaymentStatus,
    pub transaction_id: String,
    pub date: String,
    pub notes: String,
}

/// Create payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub booking_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub method: String,
    pub status: PaymentStatus,
    pub transaction_id: String,
    pub date: String,
    pub notes: String,
}

/// Update payment payload (partial; omitted fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_wire_spelling() {
        assert_eq!(serde_json::to_string(&PaymentStatus::Refunded).unwrap(), "\"refunded\"");
        let s: PaymentStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(s, PaymentStatus::Paid);
    }

    #[test]
    fn test_payment_amount_serializes_as_number() {
        let payment = Payment {
            id: 7,
            booking_id: "BK-1024".to_string(),
            amount: Decimal::new(15999, 2),
            method: "card".to_string(),
            status: PaymentStatus::Paid,
            transaction_id: "TXN-0001".to_string(),
            date: "2025-06-01".to_string(),
            notes: String::new(),
        };
        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["amount"], 159.99);
        assert_eq!(json["bookingId"], "BK-1024");
        assert_eq!(json["transactionId"], "TXN-0001");
    }
}
