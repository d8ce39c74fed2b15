//! # roomate-db: Database Layer for Roomate
//!
//! Booking storage on SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Roomate Data Flow                                │
//! │                                                                         │
//! │  Service layer (create booking, approve, monthly sheet)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    roomate-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌──────────────────┐   ┌──────────────┐    │   │
//! │  │   │  Database   │   │   Repositories   │   │   queries    │    │   │
//! │  │   │  (pool.rs)  │◄──│ BookingRepository│──►│ SQL by name  │    │   │
//! │  │   │  DbConfig   │   │ BookingWriter    │   │              │    │   │
//! │  │   │ (config.rs) │   │ DirectoryRepo    │   │ migrations/  │    │   │
//! │  │   └─────────────┘   └──────────────────┘   └──────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Connection settings, env loading
//! - [`pool`] - Database handle and repository access
//! - [`migrations`] - Embedded database migrations
//! - [`queries`] - Named SQL statements
//! - [`error`] - Database error types
//! - [`repository`] - Booking and reference-data repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomate_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let booking = db.bookings().create(&new_booking).await?;
//! let sheet = db.bookings().get_one_year(2026).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, DbConfig};
pub use error::{DbError, DbResult};
pub use pool::Database;

pub use repository::booking::BookingRepository;
pub use repository::directory::DirectoryRepository;
pub use repository::writer::BookingWriter;
