//! # Seed Data Generator
//!
//! Populates a database with rooms, services, customers and bookings for
//! development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 bookings (default) into ./roomate_dev.db
//! cargo run -p roomate-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p roomate-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p roomate-db --bin seed -- --db ./data/roomate.db
//! ```
//!
//! Bookings spread over the current year. Every third one is approved so the
//! sheets show a mix of statuses.

use chrono::{Datelike, Duration, TimeZone, Utc};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roomate_core::validation::validate_new_booking;
use roomate_core::{NewBooking, NewBookingDetail, NewBookingDetailService};
use roomate_db::{Database, DbConfig};

const STAFF: &[&str] = &["Dewi", "Agus", "Rina"];

const CUSTOMERS: &[&str] = &[
    "Budi Santoso",
    "Siti Rahma",
    "Made Wirawan",
    "Putri Lestari",
    "Andi Pratama",
    "Nur Aisyah",
];

/// Room name and nightly rate in cents.
const ROOMS: &[(&str, i64)] = &[
    ("Standard 101", 35_000_000),
    ("Standard 102", 35_000_000),
    ("Deluxe 201", 55_000_000),
    ("Deluxe 202", 55_000_000),
    ("Suite 301", 90_000_000),
];

const SERVICES: &[&str] = &["Breakfast", "Laundry", "Airport pickup", "Extra bed"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = "./roomate_dev.db".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Roomate Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of bookings to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./roomate_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    info!(db = %db_path, count, "Seeding database");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let bookings = db.bookings();

    let existing = bookings.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} bookings", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Reference data
    let dir = db.directory();
    let mut staff = Vec::new();
    for name in STAFF {
        staff.push(dir.add_user(name).await?);
    }
    let mut customers = Vec::new();
    for name in CUSTOMERS {
        customers.push(dir.add_customer(name).await?);
    }
    let mut rooms = Vec::new();
    for (name, rate) in ROOMS {
        rooms.push((dir.add_room(name).await?, *rate));
    }
    let mut services = Vec::new();
    for name in SERVICES {
        services.push((dir.add_service(name).await?, name.to_string()));
    }

    println!("✓ Reference data inserted");

    let year = Utc::now().year();
    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let nights = 1 + (seed % 4) as i64;
        let day_of_year = (seed * 37 % 360) as i64;
        let check_in = Utc
            .with_ymd_and_hms(year, 1, 1, 14, 0, 0)
            .single()
            .ok_or("invalid seed start date")?
            + Duration::days(day_of_year);

        let room_count = 1 + seed % 2;
        let details: Vec<NewBookingDetail> = (0..room_count)
            .map(|r| {
                let (room_id, rate) = &rooms[(seed + r) % rooms.len()];
                let service_count = (seed + r) % 3;
                NewBookingDetail {
                    room_id: room_id.clone(),
                    subtotal_cents: rate * nights,
                    services: (0..service_count)
                        .map(|s| {
                            let (service_id, name) = &services[(seed + s) % services.len()];
                            NewBookingDetailService {
                                service_id: service_id.clone(),
                                service_name: name.clone(),
                            }
                        })
                        .collect(),
                }
            })
            .collect();

        let input = NewBooking {
            nights,
            check_in,
            check_out: check_in + Duration::days(nights) - Duration::hours(2),
            user_id: staff[seed % staff.len()].clone(),
            customer_id: customers[seed % customers.len()].clone(),
            total_price_cents: details.iter().map(|d| d.subtotal_cents).sum(),
            details,
        };

        if let Err(e) = validate_new_booking(&input) {
            warn!(seed, error = %e, "Generated booking is invalid, skipping");
            continue;
        }

        let booking = match bookings.create(&input).await {
            Ok(booking) => booking,
            Err(e) => {
                eprintln!("Failed to insert booking #{}: {}", seed, e);
                continue;
            }
        };

        if seed % 3 == 0 {
            bookings
                .update_status(&booking.id, true, "Approved by seed")
                .await?;
        }

        generated += 1;
        if generated % 50 == 0 {
            println!("  Generated {} bookings...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} bookings in {:?}", generated, elapsed);

    // Verify sheets
    let month = Utc::now().month();
    let monthly = bookings.get_one_month(month, year).await?;
    let yearly = bookings.get_one_year(year).await?;
    println!("  Sheet {}-{:02}: {} rows", year, month, monthly.len());
    println!("  Sheet {}: {} rows", year, yearly.len());

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Installs a fmt subscriber honoring `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,roomate_db=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
