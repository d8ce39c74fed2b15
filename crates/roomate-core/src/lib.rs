//! # roomate-core: Booking Domain for Roomate
//!
//! Types and input rules for the room booking application. Everything here is
//! pure: no database, no network, no file system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Roomate Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Service / Handler Layer                         │   │
//! │  │    create booking, approve booking, monthly sheet, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ roomate-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌─────────────┐              │   │
//! │  │   │   types   │  │   period    │  │ validation  │              │   │
//! │  │   │  Booking  │  │ ReportPeriod│  │   rules     │              │   │
//! │  │   │ SheetData │  │ Day/Month/Yr│  │   checks    │              │   │
//! │  │   └───────────┘  └─────────────┘  └─────────────┘              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  roomate-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, BookingRepository          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Booking, BookingDetail, BookingDetailService, SheetData
//! - [`period`] - Report windows (day, month, year)
//! - [`error`] - Validation error types
//! - [`validation`] - Input rules for new bookings and status updates
//!
//! ## Money
//! Prices are integer minor units (`*_cents: i64`). Floats never touch money.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use roomate_core::{NewBooking, NewBookingDetail, NewBookingDetailService};
//! use roomate_core::validation::validate_new_booking;
//!
//! let booking = NewBooking {
//!     nights: 2,
//!     check_in: Utc.with_ymd_and_hms(2026, 3, 1, 14, 0, 0).unwrap(),
//!     check_out: Utc.with_ymd_and_hms(2026, 3, 3, 12, 0, 0).unwrap(),
//!     user_id: "user-1".to_string(),
//!     customer_id: "customer-1".to_string(),
//!     total_price_cents: 90_000,
//!     details: vec![NewBookingDetail {
//!         room_id: "room-101".to_string(),
//!         subtotal_cents: 90_000,
//!         services: vec![NewBookingDetailService {
//!             service_id: "svc-breakfast".to_string(),
//!             service_name: "Breakfast".to_string(),
//!         }],
//!     }],
//! };
//!
//! assert!(validate_new_booking(&booking).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod period;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use period::ReportPeriod;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest page a single `get_all` call returns; larger limits are clamped.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Maximum length of the free-text information attached to a booking.
pub const MAX_INFORMATION_LEN: usize = 1000;
