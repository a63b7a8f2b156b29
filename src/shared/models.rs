//! Domain Model Data Structures
//!
//! Represents households, their shared inventory and stores, and the
//! shopping trips built from them. These structs map one-to-one onto the
//! database tables and are also the payloads carried by API responses and
//! real-time events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A household that users belong to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Household {
    /// Unique household ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Code other users present to join this household
    pub invite_code: String,
    /// User who created the household
    pub created_by: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Membership of a user in a household
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct HouseholdMember {
    /// Household the membership belongs to
    pub household_id: Uuid,
    /// Member user ID
    pub user_id: Uuid,
    /// When the user joined
    pub joined_at: DateTime<Utc>,
}

/// An item a household keeps in its shared inventory catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct InventoryItem {
    /// Unique inventory item ID
    pub id: Uuid,
    /// Owning household
    pub household_id: Uuid,
    /// Item name (e.g., "Milk")
    pub name: String,
    /// Optional category (e.g., "Dairy")
    pub category: Option<String>,
    /// Optional default unit (e.g., "liter")
    pub default_unit: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// A store a household shops at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Store {
    /// Unique store ID
    pub id: Uuid,
    /// Owning household
    pub household_id: Uuid,
    /// Store name
    pub name: String,
    /// Optional free-form location
    pub location: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a shopping trip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// Trip is being assembled
    Planning,
    /// Someone is actively shopping
    Shopping,
    /// Trip has been completed
    Completed,
}

impl TripStatus {
    /// Convert to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planning => "planning",
            TripStatus::Shopping => "shopping",
            TripStatus::Completed => "completed",
        }
    }

    /// Parse from string (database)
    pub fn from_str(s: &str) -> Self {
        match s {
            "shopping" => TripStatus::Shopping,
            "completed" => TripStatus::Completed,
            _ => TripStatus::Planning,
        }
    }
}

/// A shopping trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique trip ID
    pub id: Uuid,
    /// Household the trip belongs to, if any (personal trips have none)
    pub household_id: Option<Uuid>,
    /// Trip name (e.g., "Saturday big shop")
    pub name: String,
    /// User who created the trip
    pub created_by: Uuid,
    /// Lifecycle status
    pub status: TripStatus,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Completed at timestamp, set when status becomes `Completed`
    pub completed_at: Option<DateTime<Utc>>,
}

/// A user explicitly granted access to a trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct TripCollaborator {
    /// Trip the collaborator was added to
    pub trip_id: Uuid,
    /// Collaborating user ID
    pub user_id: Uuid,
    /// When they were added
    pub added_at: DateTime<Utc>,
}

/// One line in a trip's checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct TripItem {
    /// Unique trip item ID
    pub id: Uuid,
    /// Owning trip
    pub trip_id: Uuid,
    /// Inventory item this line references
    pub inventory_item_id: Uuid,
    /// Optional store to buy it at
    pub store_id: Option<Uuid>,
    /// Quantity to purchase (positive)
    pub quantity: i32,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// Whether the item has been checked off
    pub is_checked: bool,
    /// When it was checked off, if it is
    pub checked_at: Option<DateTime<Utc>>,
    /// Who checked it off, if it is
    pub checked_by: Option<Uuid>,
    /// User who added the line
    pub added_by: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_status_round_trip() {
        for status in [TripStatus::Planning, TripStatus::Shopping, TripStatus::Completed] {
            assert_eq!(TripStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn test_trip_status_unknown_defaults_to_planning() {
        assert_eq!(TripStatus::from_str("archived"), TripStatus::Planning);
    }

    #[test]
    fn test_trip_status_serde_snake_case() {
        let json = serde_json::to_string(&TripStatus::Shopping).unwrap();
        assert_eq!(json, "\"shopping\"");
    }
}
