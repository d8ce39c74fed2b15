//! # Row Mappers
//!
//! One function per entity turning a `SqliteRow` into its domain type by
//! column name. Mappers don't know which query produced the row; any
//! statement selecting the right columns (including `RETURNING` clauses)
//! can use them.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use roomate_core::{Booking, BookingDetail, BookingDetailService, SheetData};

/// Maps a `bookings` row. Details are left unloaded (`None`).
pub fn map_booking(row: &SqliteRow) -> Result<Booking, sqlx::Error> {
    Ok(Booking {
        id: row.try_get("id")?,
        nights: row.try_get("nights")?,
        check_in: row.try_get("check_in")?,
        check_out: row.try_get("check_out")?,
        user_id: row.try_get("user_id")?,
        customer_id: row.try_get("customer_id")?,
        is_agree: row.try_get("is_agree")?,
        information: row.try_get("information")?,
        total_price_cents: row.try_get("total_price_cents")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        is_deleted: row.try_get("is_deleted")?,
        details: None,
    })
}

/// Maps a `booking_details` row. Services start empty.
pub fn map_detail(row: &SqliteRow) -> Result<BookingDetail, sqlx::Error> {
    Ok(BookingDetail {
        id: row.try_get("id")?,
        booking_id: row.try_get("booking_id")?,
        room_id: row.try_get("room_id")?,
        subtotal_cents: row.try_get("subtotal_cents")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        is_deleted: row.try_get("is_deleted")?,
        services: Vec::new(),
    })
}

pub fn map_service(row: &SqliteRow) -> Result<BookingDetailService, sqlx::Error> {
    Ok(BookingDetailService {
        id: row.try_get("id")?,
        booking_detail_id: row.try_get("booking_detail_id")?,
        service_id: row.try_get("service_id")?,
        service_name: row.try_get("service_name")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        is_deleted: row.try_get("is_deleted")?,
    })
}

pub fn map_sheet(row: &SqliteRow) -> Result<SheetData, sqlx::Error> {
    Ok(SheetData {
        booking_id: row.try_get("booking_id")?,
        check_in: row.try_get("check_in")?,
        check_out: row.try_get("check_out")?,
        user_name: row.try_get("user_name")?,
        customer_name: row.try_get("customer_name")?,
        is_agree: row.try_get("is_agree")?,
        information: row.try_get("information")?,
        total_price_cents: row.try_get("total_price_cents")?,
    })
}
