//! Room Model

use serde::{Deserialize, Serialize};

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Executive,
}

/// Room occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Vacant,
    Occupied,
    Maintenance,
}

/// Housekeeping status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningStatus {
    Clean,
    Pending,
}

/// Maintenance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    None,
    Active,
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub floor: String,
    pub status: RoomStatus,
    /// Current guest name, empty when vacant
    pub guest: String,
    pub check_in: String,
    pub check_out: String,
    pub cleaning_status: CleaningStatus,
    pub maintenance_status: MaintenanceStatus,
    pub notes: String,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub floor: String,
    pub status: RoomStatus,
    pub guest: String,
    pub check_in: String,
    pub check_out: String,
    pub cleaning_status: CleaningStatus,
    pub maintenance_status: MaintenanceStatus,
    pub notes: String,
}

/// Update room payload (partial; omitted fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaning_status: Option<CleaningStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_status: Option<MaintenanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_wire_spelling() {
        assert_eq!(serde_json::to_string(&RoomType::Deluxe).unwrap(), "\"Deluxe\"");
        let t: RoomType = serde_json::from_str("\"Executive\"").unwrap();
        assert_eq!(t, RoomType::Executive);
    }

    #[test]
    fn test_room_wire_field_names() {
        let room = Room {
            id: 1,
            number: "101".to_string(),
            room_type: RoomType::Standard,
            floor: "1".to_string(),
            status: RoomStatus::Vacant,
            guest: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            cleaning_status: CleaningStatus::Clean,
            maintenance_status: MaintenanceStatus::None,
            notes: String::new(),
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["type"], "Standard");
        assert_eq!(json["cleaningStatus"], "clean");
        assert_eq!(json["maintenanceStatus"], "none");
        assert!(json.get("room_type").is_none());
    }

    #[test]
    fn test_room_update_omits_unset_fields() {
        let patch = RoomUpdate {
            status: Some(RoomStatus::Maintenance),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"status\":\"maintenance\"}");
    }
}
