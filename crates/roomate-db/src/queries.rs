//! # Query Text
//!
//! Every SQL statement used by the repositories, by name. Repositories bind
//! parameters positionally (`?1`, `?2`, ...) and never build SQL themselves.
//!
//! Column lists are kept in one place per table so the row mappers in
//! [`crate::repository::rows`] always see the same shape.

// =============================================================================
// Bookings
// =============================================================================

pub const GET_BOOKING: &str = r#"
    SELECT id, nights, check_in, check_out, user_id, customer_id,
           is_agree, information, total_price_cents,
           created_at, updated_at, is_deleted
    FROM bookings
    WHERE id = ?1
"#;

/// Newest first. `LIMIT 0` yields no rows.
pub const GET_ALL_BOOKINGS: &str = r#"
    SELECT id, nights, check_in, check_out, user_id, customer_id,
           is_agree, information, total_price_cents,
           created_at, updated_at, is_deleted
    FROM bookings
    WHERE is_deleted = 0
    ORDER BY created_at DESC, id
    LIMIT ?1 OFFSET ?2
"#;

pub const CREATE_BOOKING: &str = r#"
    INSERT INTO bookings (
        id, nights, check_in, check_out, user_id, customer_id,
        total_price_cents, created_at, updated_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
    RETURNING id, nights, check_in, check_out, user_id, customer_id,
              is_agree, information, total_price_cents,
              created_at, updated_at, is_deleted
"#;

pub const UPDATE_BOOKING_STATUS: &str = r#"
    UPDATE bookings
    SET is_agree = ?2,
        information = ?3,
        updated_at = ?4
    WHERE id = ?1
    RETURNING id, nights, check_in, check_out, user_id, customer_id,
              is_agree, information, total_price_cents,
              created_at, updated_at, is_deleted
"#;

/// Hard delete; details and services go with it via `ON DELETE CASCADE`.
pub const DELETE_BOOKING: &str = "DELETE FROM bookings WHERE id = ?1";

pub const COUNT_BOOKINGS: &str = "SELECT COUNT(*) FROM bookings";

// =============================================================================
// Booking Details
// =============================================================================

pub const GET_BOOKING_DETAILS: &str = r#"
    SELECT id, booking_id, room_id, subtotal_cents,
           created_at, updated_at, is_deleted
    FROM booking_details
    WHERE booking_id = ?1 AND is_deleted = 0
    ORDER BY created_at, rowid
"#;

pub const CREATE_BOOKING_DETAIL: &str = r#"
    INSERT INTO booking_details (
        id, booking_id, room_id, subtotal_cents, created_at, updated_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?5)
    RETURNING id, booking_id, room_id, subtotal_cents,
              created_at, updated_at, is_deleted
"#;

// =============================================================================
// Booking Detail Services
// =============================================================================

/// All live services of one booking, across its live details.
pub const GET_BOOKING_DETAIL_SERVICES: &str = r#"
    SELECT s.id, s.booking_detail_id, s.service_id, s.service_name,
           s.created_at, s.updated_at, s.is_deleted
    FROM booking_detail_services s
    INNER JOIN booking_details d ON d.id = s.booking_detail_id
    WHERE d.booking_id = ?1 AND d.is_deleted = 0 AND s.is_deleted = 0
    ORDER BY s.created_at, s.rowid
"#;

pub const CREATE_BOOKING_DETAIL_SERVICE: &str = r#"
    INSERT INTO booking_detail_services (
        id, booking_detail_id, service_id, service_name, created_at, updated_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?5)
    RETURNING id, booking_detail_id, service_id, service_name,
              created_at, updated_at, is_deleted
"#;

// =============================================================================
// Sheets
// =============================================================================
// Names resolve through users/customers, falling back to the raw id.
// ?1 is a ReportPeriod key matching the strftime pattern of each query.

pub const GET_BOOKING_ONE_DAY: &str = r#"
    SELECT b.id AS booking_id, b.check_in, b.check_out,
           COALESCE(u.name, b.user_id) AS user_name,
           COALESCE(c.name, b.customer_id) AS customer_name,
           b.is_agree, b.information, b.total_price_cents
    FROM bookings b
    LEFT JOIN users u ON u.id = b.user_id
    LEFT JOIN customers c ON c.id = b.customer_id
    WHERE b.is_deleted = 0 AND strftime('%Y-%m-%d', b.check_in) = ?1
    ORDER BY b.check_in, b.id
"#;

pub const GET_BOOKING_ONE_MONTH: &str = r#"
    SELECT b.id AS booking_id, b.check_in, b.check_out,
           COALESCE(u.name, b.user_id) AS user_name,
           COALESCE(c.name, b.customer_id) AS customer_name,
           b.is_agree, b.information, b.total_price_cents
    FROM bookings b
    LEFT JOIN users u ON u.id = b.user_id
    LEFT JOIN customers c ON c.id = b.customer_id
    WHERE b.is_deleted = 0 AND strftime('%Y-%m', b.check_in) = ?1
    ORDER BY b.check_in, b.id
"#;

pub const GET_BOOKING_ONE_YEAR: &str = r#"
    SELECT b.id AS booking_id, b.check_in, b.check_out,
           COALESCE(u.name, b.user_id) AS user_name,
           COALESCE(c.name, b.customer_id) AS customer_name,
           b.is_agree, b.information, b.total_price_cents
    FROM bookings b
    LEFT JOIN users u ON u.id = b.user_id
    LEFT JOIN customers c ON c.id = b.customer_id
    WHERE b.is_deleted = 0 AND strftime('%Y', b.check_in) = ?1
    ORDER BY b.check_in, b.id
"#;

// =============================================================================
// Reference Data
// =============================================================================

pub const CREATE_USER: &str = "INSERT INTO users (id, name, created_at) VALUES (?1, ?2, ?3)";
pub const CREATE_CUSTOMER: &str =
    "INSERT INTO customers (id, name, created_at) VALUES (?1, ?2, ?3)";
pub const CREATE_ROOM: &str = "INSERT INTO rooms (id, name, created_at) VALUES (?1, ?2, ?3)";
pub const CREATE_SERVICE: &str =
    "INSERT INTO services (id, name, created_at) VALUES (?1, ?2, ?3)";

pub const GET_USER_NAME: &str = "SELECT name FROM users WHERE id = ?1";
pub const GET_CUSTOMER_NAME: &str = "SELECT name FROM customers WHERE id = ?1";
pub const GET_ROOM_NAME: &str = "SELECT name FROM rooms WHERE id = ?1";
pub const GET_SERVICE_NAME: &str = "SELECT name FROM services WHERE id = ?1";
