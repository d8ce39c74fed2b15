//! # Domain Types
//!
//! Core domain types used throughout Roomate.
//!
//! ## Ownership Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Booking                 1:N   BookingDetail          1:N               │
//! │  ─────────────────────  ────►  ──────────────────    ────►              │
//! │  id, nights                    id, booking_id (FK)                      │
//! │  check_in / check_out          room_id                                  │
//! │  user_id, customer_id          subtotal_cents                           │
//! │  is_agree, information                                                  │
//! │                                BookingDetailService                     │
//! │                                ──────────────────────                   │
//! │                                id, booking_detail_id (FK)               │
//! │                                service_id, service_name (snapshot)      │
//! │                                                                         │
//! │  SheetData: flattened read projection for reports                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stored vs. New
//! `Booking` and friends are rows as the database returns them. `NewBooking`
//! and friends carry only what a caller may supply when creating one; ids,
//! timestamps and flags are assigned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Booking
// =============================================================================

/// A reservation spanning check-in to check-out, owned by a user and made
/// for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Booking {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Length of the stay in nights.
    pub nights: i64,

    #[ts(as = "String")]
    pub check_in: DateTime<Utc>,

    #[ts(as = "String")]
    pub check_out: DateTime<Utc>,

    /// User (staff member) who owns the booking.
    pub user_id: String,

    /// Customer the booking was made for.
    pub customer_id: String,

    /// Whether the booking has been approved.
    pub is_agree: bool,

    /// Free-text note, usually set together with the approval decision.
    pub information: String,

    /// Total price in cents.
    pub total_price_cents: i64,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    /// Logical deletion marker.
    pub is_deleted: bool,

    /// Room allocations. `None` when the read did not load them (list reads).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub details: Option<Vec<BookingDetail>>,
}

impl Booking {
    /// Returns the loaded details, or an empty slice if none were loaded.
    pub fn details(&self) -> &[BookingDetail] {
        self.details.as_deref().unwrap_or(&[])
    }

    /// Total number of services across all loaded details.
    pub fn service_count(&self) -> usize {
        self.details().iter().map(|d| d.services.len()).sum()
    }
}

// =============================================================================
// Booking Detail
// =============================================================================

/// One room allocation within a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingDetail {
    pub id: String,
    pub booking_id: String,
    pub room_id: String,
    /// Price of this room for the whole stay, in cents.
    pub subtotal_cents: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    #[serde(default)]
    pub services: Vec<BookingDetailService>,
}

// =============================================================================
// Booking Detail Service
// =============================================================================

/// An add-on attached to a booking detail.
/// The service name is copied at creation time so later renames don't
/// rewrite booking history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingDetailService {
    pub id: String,
    pub booking_detail_id: String,
    pub service_id: String,
    /// Service name at time of booking (frozen).
    pub service_name: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

// =============================================================================
// Creation Inputs
// =============================================================================

/// Input for creating a booking with its details and services in one go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewBooking {
    pub nights: i64,
    #[ts(as = "String")]
    pub check_in: DateTime<Utc>,
    #[ts(as = "String")]
    pub check_out: DateTime<Utc>,
    pub user_id: String,
    pub customer_id: String,
    pub total_price_cents: i64,
    pub details: Vec<NewBookingDetail>,
}

impl NewBooking {
    /// Number of service rows this booking will create.
    pub fn service_count(&self) -> usize {
        self.details.iter().map(|d| d.services.len()).sum()
    }
}

/// Input for one room allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewBookingDetail {
    pub room_id: String,
    pub subtotal_cents: i64,
    #[serde(default)]
    pub services: Vec<NewBookingDetailService>,
}

/// Input for one add-on service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewBookingDetailService {
    pub service_id: String,
    pub service_name: String,
}

// =============================================================================
// Sheet Data
// =============================================================================

/// A flattened booking row for day/month/year reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SheetData {
    pub booking_id: String,
    #[ts(as = "String")]
    pub check_in: DateTime<Utc>,
    #[ts(as = "String")]
    pub check_out: DateTime<Utc>,
    /// Display name of the owning user; the raw user id when no user row exists.
    pub user_name: String,
    /// Display name of the customer; the raw customer id when no customer row exists.
    pub customer_name: String,
    pub is_agree: bool,
    pub information: String,
    pub total_price_cents: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn booking(details: Option<Vec<BookingDetail>>) -> Booking {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap();
        Booking {
            id: "b-1".to_string(),
            nights: 1,
            check_in: now,
            check_out: now + chrono::Duration::days(1),
            user_id: "u-1".to_string(),
            customer_id: "c-1".to_string(),
            is_agree: false,
            information: String::new(),
            total_price_cents: 50_000,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            details,
        }
    }

    fn detail(services: usize) -> BookingDetail {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap();
        BookingDetail {
            id: "d-1".to_string(),
            booking_id: "b-1".to_string(),
            room_id: "r-1".to_string(),
            subtotal_cents: 50_000,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            services: (0..services)
                .map(|i| BookingDetailService {
                    id: format!("s-{i}"),
                    booking_detail_id: "d-1".to_string(),
                    service_id: format!("svc-{i}"),
                    service_name: "Laundry".to_string(),
                    created_at: now,
                    updated_at: now,
                    is_deleted: false,
                })
                .collect(),
        }
    }

    #[test]
    fn test_details_defaults_to_empty_slice() {
        let b = booking(None);
        assert!(b.details().is_empty());
        assert_eq!(b.service_count(), 0);
    }

    #[test]
    fn test_service_count_spans_details() {
        let b = booking(Some(vec![detail(2), detail(3)]));
        assert_eq!(b.details().len(), 2);
        assert_eq!(b.service_count(), 5);
    }

    #[test]
    fn test_unloaded_details_are_not_serialized() {
        let json = serde_json::to_value(booking(None)).unwrap();
        assert!(json.get("details").is_none());

        let json = serde_json::to_value(booking(Some(vec![]))).unwrap();
        assert_eq!(json["details"], serde_json::json!([]));
    }

    #[test]
    fn test_new_booking_service_count() {
        let input = NewBooking {
            nights: 1,
            check_in: Utc::now(),
            check_out: Utc::now(),
            user_id: "u".to_string(),
            customer_id: "c".to_string(),
            total_price_cents: 0,
            details: vec![
                NewBookingDetail {
                    room_id: "r1".to_string(),
                    subtotal_cents: 0,
                    services: vec![],
                },
                NewBookingDetail {
                    room_id: "r2".to_string(),
                    subtotal_cents: 0,
                    services: vec![NewBookingDetailService {
                        service_id: "s".to_string(),
                        service_name: "Spa".to_string(),
                    }],
                },
            ],
        };
        assert_eq!(input.service_count(), 1);
    }
}
