//! # Repository Module
//!
//! Database repository implementations for Roomate.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Call Flows                                     │
//! │                                                                         │
//! │  Service layer                                                         │
//! │       │  db.bookings().get_one_month(3, 2026)                          │
//! │       ▼                                                                 │
//! │  BookingRepository ──► queries::GET_BOOKING_ONE_MONTH (SQL by name)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite rows ──► rows::map_sheet (one mapper per entity)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<SheetData>                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`BookingRepository`](booking::BookingRepository) - Bookings, nested create, sheets
//! - [`DirectoryRepository`](directory::DirectoryRepository) - Users, customers, rooms, services
//!
//! [`BookingWriter`](writer::BookingWriter) does the inserts inside the
//! create transaction.

pub mod booking;
pub mod directory;
pub mod rows;
pub mod writer;
