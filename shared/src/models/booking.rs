//! Booking Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payment::PaymentStatus;
use super::room::RoomType;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    CheckedIn,
    CheckedOut,
}

/// Booking entity
///
/// `id`, `booking_id` and `created_at` are assigned by the backend at
/// creation and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    /// Human-readable booking code, distinct from the numeric id
    pub booking_id: String,
    pub guest: String,
    pub email: String,
    pub phone: String,
    pub room_type: RoomType,
    pub room_number: String,
    pub check_in: String,
    pub check_out: String,
    pub status: BookingStatus,
    pub adults: u32,
    pub children: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub created_at: String,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_charges: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_charges_description: Option<String>,
}

/// Create booking payload (backend assigns id, bookingId and createdAt)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub guest: String,
    pub email: String,
    pub phone: String,
    pub room_type: RoomType,
    pub room_number: String,
    pub check_in: String,
    pub check_out: String,
    pub status: BookingStatus,
    pub adults: u32,
    pub children: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_charges: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_charges_description: Option<String>,
}

/// Update booking payload (partial; omitted fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adults: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<u32>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_charges: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_charges_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::CheckedIn).unwrap(),
            "\"checked-in\""
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::CheckedOut).unwrap(),
            "\"checked-out\""
        );
        let s: BookingStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(s, BookingStatus::Cancelled);
    }

    #[test]
    fn test_booking_create_has_no_server_fields() {
        let payload = BookingCreate {
            guest: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            phone: "+1-555-0100".to_string(),
            room_type: RoomType::Suite,
            room_number: "301".to_string(),
            check_in: "2025-06-01".to_string(),
            check_out: "2025-06-05".to_string(),
            status: BookingStatus::Confirmed,
            adults: 2,
            children: 1,
            total_amount: Decimal::new(84000, 2),
            payment_status: PaymentStatus::Pending,
            additional_charges: None,
            additional_charges_description: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("bookingId").is_none());
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["totalAmount"], 840.0);
    }

    #[test]
    fn test_booking_update_omits_unset_fields() {
        let patch = BookingUpdate {
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"paymentStatus\":\"paid\"}");
    }
}
