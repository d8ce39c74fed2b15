//! # Booking Repository
//!
//! Database operations for bookings, their details and detail services, plus
//! the day/month/year sheets.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Booking Lifecycle                                 │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── create() → Booking { is_agree: false, details: Some([...]) }   │
//! │         booking + details + services in ONE transaction                │
//! │                                                                         │
//! │  2. REVIEW                                                             │
//! │     └── update_status(id, is_agree, information)                       │
//! │         only approval flag + information change                        │
//! │                                                                         │
//! │  3. REPORT                                                             │
//! │     └── get_one_day / get_one_month / get_one_year → Vec<SheetData>    │
//! │                                                                         │
//! │  4. DELETE                                                             │
//! │     └── delete(id) → row removed (cascades to details/services)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Soft Delete
//! Rows carry an `is_deleted` flag, but `delete` removes the row outright.
//! Nothing in this repository sets the flag. Flagged details and services
//! are hidden from `get`; flagged bookings are hidden from `get_all` and the
//! sheets but still resolve through `get`.

use chrono::{NaiveDate, Utc};
use sqlx::{Sqlite, SqlitePool};
use std::collections::HashMap;
use tracing::{debug, error, warn};

use crate::error::{DbError, DbResult};
use crate::queries;
use crate::repository::rows::{map_booking, map_detail, map_service, map_sheet};
use crate::repository::writer::BookingWriter;
use roomate_core::validation::{clamp_page_size, validate_information, validate_new_booking};
use roomate_core::{
    Booking, BookingDetail, BookingDetailService, NewBooking, ReportPeriod, SheetData,
};

/// Repository for booking database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookingRepository::new(pool);
///
/// let booking = repo.create(&new_booking).await?;
/// let approved = repo.update_status(&booking.id, true, "paid in advance").await?;
/// let march = repo.get_one_month(3, 2026).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    /// Creates a new BookingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookingRepository { pool }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Gets a booking by ID with its live details and their services.
    ///
    /// The booking row itself is returned even when its `is_deleted` flag is
    /// set, so callers holding an id can still inspect it.
    ///
    /// ## Returns
    /// * `Ok(Booking)` - `details` is always `Some`
    /// * `Err(DbError::NotFound)` - no booking row with this id
    pub async fn get(&self, id: &str) -> DbResult<Booking> {
        debug!(id = %id, "Fetching booking");

        let mut booking = sqlx::query::<Sqlite>(queries::GET_BOOKING)
            .bind(id)
            .try_map(|row| map_booking(&row))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Booking", id))?;

        booking.details = Some(self.load_details(&booking.id).await?);
        Ok(booking)
    }

    /// Lists live bookings, newest first, without details.
    ///
    /// `limit = 0` or an offset past the end yields an empty vector. Limits
    /// above [`roomate_core::MAX_PAGE_SIZE`] are clamped to it.
    pub async fn get_all(&self, limit: u32, offset: u32) -> DbResult<Vec<Booking>> {
        let limit = clamp_page_size(limit);
        debug!(limit, offset, "Listing bookings");

        let bookings = sqlx::query::<Sqlite>(queries::GET_ALL_BOOKINGS)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .try_map(|row| map_booking(&row))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = bookings.len(), "Listed bookings");
        Ok(bookings)
    }

    /// Loads live details of a booking, each with its live services.
    async fn load_details(&self, booking_id: &str) -> DbResult<Vec<BookingDetail>> {
        let mut details = sqlx::query::<Sqlite>(queries::GET_BOOKING_DETAILS)
            .bind(booking_id)
            .try_map(|row| map_detail(&row))
            .fetch_all(&self.pool)
            .await?;

        let services: Vec<BookingDetailService> =
            sqlx::query::<Sqlite>(queries::GET_BOOKING_DETAIL_SERVICES)
                .bind(booking_id)
                .try_map(|row| map_service(&row))
                .fetch_all(&self.pool)
                .await?;

        let mut by_detail: HashMap<String, Vec<BookingDetailService>> = HashMap::new();
        for service in services {
            by_detail
                .entry(service.booking_detail_id.clone())
                .or_default()
                .push(service);
        }

        for detail in &mut details {
            detail.services = by_detail.remove(&detail.id).unwrap_or_default();
        }

        Ok(details)
    }

    /// Total number of booking rows, deleted flag included.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar(queries::COUNT_BOOKINGS)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Creates a booking with all of its details and services.
    ///
    /// ## What This Does
    /// 1. Validates the whole input tree (no transaction is opened on failure)
    /// 2. Opens a transaction
    /// 3. Inserts the booking, then each detail, then each detail's services
    /// 4. Commits
    ///
    /// If any insert or the commit fails, the transaction is rolled back and
    /// the error is returned; no row from this call is persisted.
    ///
    /// ## Returns
    /// The stored booking with generated ids and timestamps, details in input
    /// order.
    pub async fn create(&self, input: &NewBooking) -> DbResult<Booking> {
        validate_new_booking(input)?;

        debug!(
            details = input.details.len(),
            services = input.service_count(),
            "Creating booking"
        );

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let written = BookingWriter::new(&mut tx).write(input).await;

        match written {
            Ok(booking) => {
                tx.commit().await.map_err(DbError::transaction)?;
                debug!(id = %booking.id, "Booking created");
                Ok(booking)
            }
            Err(err) => {
                warn!(error = %err, "Booking create failed, rolling back");
                if let Err(rollback_err) = tx.rollback().await {
                    error!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Sets the approval flag and information of a booking.
    ///
    /// Nothing else on the row changes except `updated_at`.
    ///
    /// ## Returns
    /// * `Ok(Booking)` - updated row with details loaded
    /// * `Err(DbError::NotFound)` - no booking with this id
    pub async fn update_status(
        &self,
        id: &str,
        is_agree: bool,
        information: &str,
    ) -> DbResult<Booking> {
        validate_information(information)?;
        debug!(id = %id, is_agree, "Updating booking status");

        let mut booking = sqlx::query::<Sqlite>(queries::UPDATE_BOOKING_STATUS)
            .bind(id)
            .bind(is_agree)
            .bind(information)
            .bind(Utc::now())
            .try_map(|row| map_booking(&row))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Booking", id))?;

        booking.details = Some(self.load_details(&booking.id).await?);
        Ok(booking)
    }

    /// Deletes a booking row (hard delete).
    ///
    /// An unknown id is not an error.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query::<Sqlite>(queries::DELETE_BOOKING)
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id = %id, rows = result.rows_affected(), "Deleted booking");
        Ok(())
    }

    // =========================================================================
    // Sheets
    // =========================================================================

    /// Bookings checking in on `date` (UTC).
    pub async fn get_one_day(&self, date: NaiveDate) -> DbResult<Vec<SheetData>> {
        self.sheet(queries::GET_BOOKING_ONE_DAY, ReportPeriod::day(date))
            .await
    }

    /// Bookings checking in during `month` (1-12) of `year`.
    pub async fn get_one_month(&self, month: u32, year: i32) -> DbResult<Vec<SheetData>> {
        let period = ReportPeriod::month(year, month)?;
        self.sheet(queries::GET_BOOKING_ONE_MONTH, period).await
    }

    /// Bookings checking in during `year`.
    pub async fn get_one_year(&self, year: i32) -> DbResult<Vec<SheetData>> {
        let period = ReportPeriod::year(year)?;
        self.sheet(queries::GET_BOOKING_ONE_YEAR, period).await
    }

    /// Runs any sheet for a period, choosing the query by granularity.
    pub async fn get_sheet(&self, period: ReportPeriod) -> DbResult<Vec<SheetData>> {
        let query = match period {
            ReportPeriod::Day { .. } => queries::GET_BOOKING_ONE_DAY,
            ReportPeriod::Month { .. } => queries::GET_BOOKING_ONE_MONTH,
            ReportPeriod::Year { .. } => queries::GET_BOOKING_ONE_YEAR,
        };
        self.sheet(query, period).await
    }

    async fn sheet(&self, query: &'static str, period: ReportPeriod) -> DbResult<Vec<SheetData>> {
        let key = period.key();
        debug!(period = %key, "Building booking sheet");

        let rows = sqlx::query::<Sqlite>(query)
            .bind(&key)
            .try_map(|row| map_sheet(&row))
            .fetch_all(&self.pool)
            .await?;

        debug!(period = %key, count = rows.len(), "Booking sheet built");
        Ok(rows)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use chrono::{DateTime, Duration, TimeZone};
    use roomate_core::{NewBookingDetail, NewBookingDetailService};

    struct Fixture {
        db: Database,
        user_id: String,
        customer_id: String,
        rooms: Vec<String>,
        services: Vec<String>,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let dir = db.directory();

        let user_id = dir.add_user("Dewi").await.unwrap();
        let customer_id = dir.add_customer("Budi Santoso").await.unwrap();
        let mut rooms = Vec::new();
        for name in ["101", "102", "201"] {
            rooms.push(dir.add_room(name).await.unwrap());
        }
        let mut services = Vec::new();
        for name in ["Breakfast", "Laundry"] {
            services.push(dir.add_service(name).await.unwrap());
        }

        Fixture {
            db,
            user_id,
            customer_id,
            rooms,
            services,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 14, 0, 0).unwrap()
    }

    impl Fixture {
        fn new_booking(
            &self,
            check_in: DateTime<Utc>,
            details: usize,
            services: usize,
        ) -> NewBooking {
            NewBooking {
                nights: 2,
                check_in,
                check_out: check_in + Duration::days(2),
                user_id: self.user_id.clone(),
                customer_id: self.customer_id.clone(),
                total_price_cents: 100_000 * details as i64,
                details: (0..details)
                    .map(|i| NewBookingDetail {
                        room_id: self.rooms[i % self.rooms.len()].clone(),
                        subtotal_cents: 100_000,
                        services: (0..services)
                            .map(|j| NewBookingDetailService {
                                service_id: self.services[j % self.services.len()].clone(),
                                service_name: format!("Service {j}"),
                            })
                            .collect(),
                    })
                    .collect(),
            }
        }

        async fn table_count(&self, table: &str) -> i64 {
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(self.db.pool())
                .await
                .unwrap()
        }

        async fn soft_delete(&self, table: &str, id: &str) {
            sqlx::query(&format!("UPDATE {table} SET is_deleted = 1 WHERE id = ?1"))
                .bind(id)
                .execute(self.db.pool())
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_create_writes_every_level() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let booking = repo.create(&fx.new_booking(at(2026, 3, 1), 3, 2)).await.unwrap();

        assert!(!booking.is_agree);
        assert_eq!(booking.information, "");
        assert_eq!(booking.created_at, booking.updated_at);
        assert_eq!(booking.details().len(), 3);
        assert_eq!(booking.service_count(), 6);
        for detail in booking.details() {
            assert_eq!(detail.booking_id, booking.id);
            for service in &detail.services {
                assert_eq!(service.booking_detail_id, detail.id);
            }
        }

        assert_eq!(fx.table_count("bookings").await, 1);
        assert_eq!(fx.table_count("booking_details").await, 3);
        assert_eq!(fx.table_count("booking_detail_services").await, 6);
    }

    #[tokio::test]
    async fn test_create_without_details() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let booking = repo.create(&fx.new_booking(at(2026, 3, 1), 0, 0)).await.unwrap();

        assert_eq!(booking.details, Some(vec![]));
        assert_eq!(fx.table_count("bookings").await, 1);
        assert_eq!(fx.table_count("booking_details").await, 0);
        assert_eq!(repo.get(&booking.id).await.unwrap().details, Some(vec![]));
    }

    #[tokio::test]
    async fn test_create_rolls_back_on_failing_service() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let mut input = fx.new_booking(at(2026, 3, 1), 2, 2);
        input.details[1].services[1].service_id = "no-such-service".to_string();

        let err = repo.create(&input).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }), "{err:?}");

        assert_eq!(fx.table_count("bookings").await, 0);
        assert_eq!(fx.table_count("booking_details").await, 0);
        assert_eq!(fx.table_count("booking_detail_services").await, 0);
    }

    #[tokio::test]
    async fn test_create_rolls_back_on_failing_detail() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let mut input = fx.new_booking(at(2026, 3, 1), 2, 1);
        input.details[1].room_id = "no-such-room".to_string();

        assert!(repo.create(&input).await.is_err());
        assert_eq!(fx.table_count("bookings").await, 0);
        assert_eq!(fx.table_count("booking_details").await, 0);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_writing() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let mut input = fx.new_booking(at(2026, 3, 1), 1, 0);
        input.check_out = input.check_in;

        let err = repo.create(&input).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_hydrates_details_and_services() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let created = repo.create(&fx.new_booking(at(2026, 3, 1), 2, 2)).await.unwrap();
        let fetched = repo.get(&created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let fx = fixture().await;
        let err = fx.db.bookings().get("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_all_paginates_without_details() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        for day in 1..=3 {
            repo.create(&fx.new_booking(at(2026, 4, day), 1, 1)).await.unwrap();
        }

        let page = repo.get_all(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert!(page.iter().all(|b| b.details.is_none()));

        assert_eq!(repo.get_all(2, 2).await.unwrap().len(), 1);
        assert!(repo.get_all(10, 3).await.unwrap().is_empty());
        assert!(repo.get_all(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_all_clamps_oversized_limit() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        for day in 1..=3 {
            repo.create(&fx.new_booking(at(2026, 4, day), 1, 0)).await.unwrap();
        }

        assert_eq!(repo.get_all(1000, 0).await.unwrap().len(), 3);
        assert_eq!(repo.get_all(u32::MAX, 1).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_hides_soft_deleted_details_and_services() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let created = repo.create(&fx.new_booking(at(2026, 3, 1), 2, 2)).await.unwrap();
        let first = &created.details()[0];
        let second = &created.details()[1];

        fx.soft_delete("booking_details", &first.id).await;
        fx.soft_delete("booking_detail_services", &second.services[0].id)
            .await;

        let fetched = repo.get(&created.id).await.unwrap();
        assert_eq!(fetched.details().len(), 1);

        let detail = &fetched.details()[0];
        assert_eq!(detail.id, second.id);
        assert_eq!(detail.services.len(), 1);
        assert_eq!(detail.services[0].id, second.services[1].id);
    }

    #[tokio::test]
    async fn test_soft_deleted_booking_is_hidden_from_lists_and_sheets() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let keep = repo.create(&fx.new_booking(at(2026, 3, 1), 1, 0)).await.unwrap();
        let hidden = repo.create(&fx.new_booking(at(2026, 3, 1), 1, 0)).await.unwrap();
        fx.soft_delete("bookings", &hidden.id).await;

        let listed = repo.get_all(10, 0).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);

        let day = repo
            .get_one_day(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
            .await
            .unwrap();
        let month = repo.get_one_month(3, 2026).await.unwrap();
        let year = repo.get_one_year(2026).await.unwrap();
        for sheet in [day, month, year] {
            assert_eq!(sheet.len(), 1);
            assert_eq!(sheet[0].booking_id, keep.id);
        }

        // Still reachable by id, and still counted
        let fetched = repo.get(&hidden.id).await.unwrap();
        assert!(fetched.is_deleted);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_status_changes_only_status_fields() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let created = repo.create(&fx.new_booking(at(2026, 5, 10), 1, 1)).await.unwrap();
        let updated = repo
            .update_status(&created.id, true, "deposit received")
            .await
            .unwrap();

        assert!(updated.is_agree);
        assert_eq!(updated.information, "deposit received");
        assert!(updated.updated_at >= created.updated_at);

        let expected = Booking {
            is_agree: true,
            information: "deposit received".to_string(),
            updated_at: updated.updated_at,
            ..created
        };
        assert_eq!(updated, expected);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_is_not_found() {
        let fx = fixture().await;
        let err = fx
            .db
            .bookings()
            .update_status("missing", true, "")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_booking_and_children() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let keep = repo.create(&fx.new_booking(at(2026, 6, 1), 1, 1)).await.unwrap();
        let gone = repo.create(&fx.new_booking(at(2026, 6, 2), 2, 2)).await.unwrap();

        repo.delete(&gone.id).await.unwrap();

        assert!(repo.get(&gone.id).await.unwrap_err().is_not_found());
        assert!(repo.get(&keep.id).await.is_ok());
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(fx.table_count("booking_details").await, 1);
        assert_eq!(fx.table_count("booking_detail_services").await, 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_ok() {
        let fx = fixture().await;
        assert!(fx.db.bookings().delete("missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_sheets_filter_by_period() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        repo.create(&fx.new_booking(at(2026, 3, 1), 1, 0)).await.unwrap();
        repo.create(&fx.new_booking(at(2026, 3, 15), 1, 0)).await.unwrap();
        repo.create(&fx.new_booking(at(2026, 7, 1), 1, 0)).await.unwrap();
        repo.create(&fx.new_booking(at(2025, 3, 1), 1, 0)).await.unwrap();

        let day = repo
            .get_one_day(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
            .await
            .unwrap();
        assert_eq!(day.len(), 1);

        assert_eq!(repo.get_one_month(3, 2026).await.unwrap().len(), 2);
        assert_eq!(repo.get_one_year(2026).await.unwrap().len(), 3);
        assert_eq!(repo.get_one_year(2025).await.unwrap().len(), 1);

        let via_period = repo
            .get_sheet(ReportPeriod::month(2026, 7).unwrap())
            .await
            .unwrap();
        assert_eq!(via_period.len(), 1);
    }

    #[tokio::test]
    async fn test_sheet_resolves_names() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        let created = repo.create(&fx.new_booking(at(2026, 8, 8), 1, 0)).await.unwrap();
        let sheet = repo.get_one_month(8, 2026).await.unwrap();

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet[0].booking_id, created.id);
        assert_eq!(sheet[0].user_name, "Dewi");
        assert_eq!(sheet[0].customer_name, "Budi Santoso");
        assert_eq!(sheet[0].check_in, created.check_in);
        assert_eq!(sheet[0].total_price_cents, created.total_price_cents);
    }

    #[tokio::test]
    async fn test_sheet_falls_back_to_raw_ids_without_reference_rows() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        repo.create(&fx.new_booking(at(2026, 8, 8), 0, 0)).await.unwrap();

        // Orphan the booking; only possible with enforcement off
        sqlx::query("PRAGMA foreign_keys = OFF")
            .execute(fx.db.pool())
            .await
            .unwrap();
        sqlx::query("DELETE FROM users")
            .execute(fx.db.pool())
            .await
            .unwrap();
        sqlx::query("DELETE FROM customers")
            .execute(fx.db.pool())
            .await
            .unwrap();

        let sheet = repo.get_one_month(8, 2026).await.unwrap();
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet[0].user_name, fx.user_id);
        assert_eq!(sheet[0].customer_name, fx.customer_id);
    }

    #[tokio::test]
    async fn test_empty_periods_return_empty_sheets() {
        let fx = fixture().await;
        let repo = fx.db.bookings();

        repo.create(&fx.new_booking(at(2026, 3, 1), 1, 0)).await.unwrap();

        assert!(repo
            .get_one_day(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
            .await
            .unwrap()
            .is_empty());
        assert!(repo.get_one_month(4, 2026).await.unwrap().is_empty());
        assert!(repo.get_one_year(1999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_month_is_rejected() {
        let fx = fixture().await;
        let err = fx.db.bookings().get_one_month(13, 2026).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }
}
