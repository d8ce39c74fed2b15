//! # Booking Writer
//!
//! Transaction-scoped inserts for the nested booking create.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Transaction, Three Levels                        │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    insert_booking ──────────────► booking.id                           │
//! │      for each detail:                                                   │
//! │        insert_detail(booking.id) ──► detail.id                         │
//! │          for each service:                                              │
//! │            insert_service(detail.id)                                   │
//! │  COMMIT            (any error → ROLLBACK, nothing persisted)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The writer only borrows the transaction; the caller decides whether to
//! commit or roll back.

use chrono::{DateTime, Utc};
use sqlx::{Sqlite, Transaction};
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use crate::queries;
use crate::repository::rows::{map_booking, map_detail, map_service};
use roomate_core::{
    Booking, BookingDetail, BookingDetailService, NewBooking, NewBookingDetail,
    NewBookingDetailService,
};

/// Inserts booking rows through a borrowed transaction.
///
/// Every row written by one writer shares the same audit timestamp.
pub struct BookingWriter<'t> {
    tx: &'t mut Transaction<'static, Sqlite>,
    now: DateTime<Utc>,
}

impl<'t> BookingWriter<'t> {
    pub fn new(tx: &'t mut Transaction<'static, Sqlite>) -> Self {
        BookingWriter { tx, now: Utc::now() }
    }

    /// Writes a booking and all of its details and services.
    ///
    /// Stops at the first failing insert; rows already written stay in the
    /// open transaction until the caller rolls it back.
    pub async fn write(&mut self, input: &NewBooking) -> DbResult<Booking> {
        let mut booking = self.insert_booking(input).await?;

        let mut details = Vec::with_capacity(input.details.len());
        for new_detail in &input.details {
            let mut detail = self.insert_detail(&booking.id, new_detail).await?;

            for new_service in &new_detail.services {
                let service = self.insert_service(&detail.id, new_service).await?;
                detail.services.push(service);
            }

            details.push(detail);
        }

        booking.details = Some(details);
        Ok(booking)
    }

    /// Inserts the parent booking row.
    pub async fn insert_booking(&mut self, input: &NewBooking) -> DbResult<Booking> {
        let id = Uuid::new_v4().to_string();
        debug!(id = %id, user_id = %input.user_id, "Inserting booking");

        let booking = sqlx::query::<Sqlite>(queries::CREATE_BOOKING)
            .bind(&id)
            .bind(input.nights)
            .bind(input.check_in)
            .bind(input.check_out)
            .bind(&input.user_id)
            .bind(&input.customer_id)
            .bind(input.total_price_cents)
            .bind(self.now)
            .try_map(|row| map_booking(&row))
            .fetch_one(&mut **self.tx)
            .await?;

        Ok(booking)
    }

    /// Inserts one room allocation under `booking_id`.
    pub async fn insert_detail(
        &mut self,
        booking_id: &str,
        input: &NewBookingDetail,
    ) -> DbResult<BookingDetail> {
        let id = Uuid::new_v4().to_string();
        debug!(
            id = %id,
            booking_id = %booking_id,
            room_id = %input.room_id,
            "Inserting booking detail"
        );

        let detail = sqlx::query::<Sqlite>(queries::CREATE_BOOKING_DETAIL)
            .bind(&id)
            .bind(booking_id)
            .bind(&input.room_id)
            .bind(input.subtotal_cents)
            .bind(self.now)
            .try_map(|row| map_detail(&row))
            .fetch_one(&mut **self.tx)
            .await?;

        Ok(detail)
    }

    /// Inserts one service under `booking_detail_id`.
    pub async fn insert_service(
        &mut self,
        booking_detail_id: &str,
        input: &NewBookingDetailService,
    ) -> DbResult<BookingDetailService> {
        let id = Uuid::new_v4().to_string();
        debug!(
            id = %id,
            booking_detail_id = %booking_detail_id,
            service_id = %input.service_id,
            "Inserting booking detail service"
        );

        let service = sqlx::query::<Sqlite>(queries::CREATE_BOOKING_DETAIL_SERVICE)
            .bind(&id)
            .bind(booking_detail_id)
            .bind(&input.service_id)
            .bind(&input.service_name)
            .bind(self.now)
            .try_map(|row| map_service(&row))
            .fetch_one(&mut **self.tx)
            .await?;

        Ok(service)
    }
}
