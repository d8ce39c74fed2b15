//! # Validation Module
//!
//! Input rules for bookings.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Service / handler layer                                      │
//! │  └── Deserialization, authentication                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Field rules, stay ordering, nested detail/service rules           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign keys (user, customer, room, service must exist)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use roomate_core::validation::{validate_information, validate_nights};
//!
//! validate_nights(3).unwrap();
//! validate_information("approved by front desk").unwrap();
//! ```

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::types::{NewBooking, NewBookingDetail, NewBookingDetailService};
use crate::{MAX_INFORMATION_LEN, MAX_PAGE_SIZE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest id accepted for foreign references.
const MAX_ID_LEN: usize = 64;

/// Longest service name snapshot.
const MAX_SERVICE_NAME_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a reference id (user, customer, room, service).
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::required(field));
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates the stay length.
///
/// ```rust
/// use roomate_core::validation::validate_nights;
///
/// assert!(validate_nights(1).is_ok());
/// assert!(validate_nights(0).is_err());
/// ```
pub fn validate_nights(nights: i64) -> ValidationResult<()> {
    if nights < 1 {
        return Err(ValidationError::NotPositive {
            field: "nights".to_string(),
        });
    }
    Ok(())
}

/// Check-out must come strictly after check-in.
pub fn validate_stay(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> ValidationResult<()> {
    if check_out <= check_in {
        return Err(ValidationError::StayOutOfOrder);
    }
    Ok(())
}

/// Validates a price in cents. Zero is allowed (complimentary rooms).
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates the free-text information set on status updates.
pub fn validate_information(information: &str) -> ValidationResult<()> {
    if information.chars().count() > MAX_INFORMATION_LEN {
        return Err(ValidationError::TooLong {
            field: "information".to_string(),
            max: MAX_INFORMATION_LEN,
        });
    }
    Ok(())
}

/// Caps a requested page size at [`MAX_PAGE_SIZE`]. Zero stays zero and
/// yields an empty page.
///
/// ```rust
/// use roomate_core::validation::clamp_page_size;
/// use roomate_core::MAX_PAGE_SIZE;
///
/// assert_eq!(clamp_page_size(20), 20);
/// assert_eq!(clamp_page_size(10_000), MAX_PAGE_SIZE);
/// ```
pub fn clamp_page_size(limit: u32) -> u32 {
    limit.min(MAX_PAGE_SIZE)
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates a complete creation input, including every nested detail and
/// service.
///
/// ## Rules
/// - at least one night, check-out after check-in
/// - user, customer, room and service ids present
/// - no negative prices
/// - every service carries a name snapshot
///
/// A booking without details is valid; it is stored with no detail rows.
pub fn validate_new_booking(booking: &NewBooking) -> ValidationResult<()> {
    validate_nights(booking.nights)?;
    validate_stay(booking.check_in, booking.check_out)?;
    validate_id("user_id", &booking.user_id)?;
    validate_id("customer_id", &booking.customer_id)?;
    validate_price_cents("total_price_cents", booking.total_price_cents)?;

    booking.details.iter().try_for_each(validate_new_detail)
}

fn validate_new_detail(detail: &NewBookingDetail) -> ValidationResult<()> {
    validate_id("room_id", &detail.room_id)?;
    validate_price_cents("subtotal_cents", detail.subtotal_cents)?;
    detail.services.iter().try_for_each(validate_new_service)
}

fn validate_new_service(service: &NewBookingDetailService) -> ValidationResult<()> {
    validate_id("service_id", &service.service_id)?;

    let name = service.service_name.trim();
    if name.is_empty() {
        return Err(ValidationError::required("service_name"));
    }
    if name.len() > MAX_SERVICE_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "service_name".to_string(),
            max: MAX_SERVICE_NAME_LEN,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
