//! Demo data for an empty database.
//!
//! Inserts a fixed catalogue of ten rooms and seven guests, then a randomised history of
//! completed stays, guests currently in house and upcoming bookings around `today`.
//! Current and upcoming stays go through the availability checker so the seeded data
//! never double-books a room.

use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{guest::GuestRepository, reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::{
        guest::{Guest, NewGuest},
        reservation::{NewReservation, ReservationStatus, StayDates},
        room::{CreateRoomParams, Room, RoomCategory},
    },
    service::{availability::AvailabilityChecker, pricing},
};

const PAST_STAYS: usize = 20;
const CURRENT_STAYS: usize = 4;
const UPCOMING_STAYS: usize = 8;

const ROOMS: [(&str, RoomCategory, i32, i64, &str); 10] = [
    ("101", RoomCategory::Single, 1, 80, "WiFi, TV, Air conditioning"),
    ("102", RoomCategory::Single, 1, 80, "WiFi, TV, Air conditioning"),
    ("103", RoomCategory::Single, 1, 85, "WiFi, TV, Air conditioning, Desk"),
    ("201", RoomCategory::Double, 2, 120, "WiFi, TV, Minibar, Air conditioning"),
    ("202", RoomCategory::Double, 2, 120, "WiFi, TV, Minibar, Air conditioning"),
    (
        "203",
        RoomCategory::Double,
        2,
        130,
        "WiFi, TV, Minibar, Air conditioning, Sea view",
    ),
    (
        "204",
        RoomCategory::Double,
        2,
        135,
        "WiFi, TV, Minibar, Air conditioning, Sea view, Balcony",
    ),
    (
        "301",
        RoomCategory::Suite,
        3,
        200,
        "WiFi, TV, Minibar, Air conditioning, Jacuzzi, Panoramic view",
    ),
    (
        "302",
        RoomCategory::Suite,
        3,
        220,
        "WiFi, TV, Minibar, Air conditioning, Jacuzzi, Balcony, Sea view",
    ),
    (
        "303",
        RoomCategory::Suite,
        3,
        250,
        "WiFi, TV, Minibar, Air conditioning, Jacuzzi, Balcony, Sea view, Living room",
    ),
];

/// First name, last name, document, nationality, email, phone.
const GUESTS: [(&str, &str, &str, &str, &str, &str); 7] = [
    ("Mario", "Rossi", "AB123456", "Italian", "mario.rossi@email.it", "+39 333 1234567"),
    ("Laura", "Bianchi", "CD789012", "Italian", "laura.bianchi@email.it", "+39 345 7890123"),
    ("Giuseppe", "Verdi", "EF345678", "Italian", "giuseppe.verdi@email.it", "+39 348 5551234"),
    ("John", "Smith", "US456789", "American", "john.smith@email.com", "+1 555 1234567"),
    ("Sophie", "Dupont", "FR789123", "French", "sophie.dupont@email.fr", "+33 6 12345678"),
    ("Hans", "Mueller", "DE555888", "German", "hans.mueller@email.de", "+49 176 12345678"),
    ("Maria", "Garcia", "ES777999", "Spanish", "maria.garcia@email.es", "+34 666 123456"),
];

/// Seeds demo data unless the database already holds rooms.
///
/// # Arguments
/// - `db` - Database connection
/// - `today` - Date the generated history is centred on
///
/// # Returns
/// - `Ok(true)` - Demo data inserted
/// - `Ok(false)` - Database already populated, nothing inserted
/// - `Err(AppError::DbErr)` - Database error; nothing is inserted
pub async fn seed_database(db: &DatabaseConnection, today: NaiveDate) -> Result<bool, AppError> {
    seed_with_rng(db, today, &mut StdRng::from_os_rng()).await
}

async fn seed_with_rng(
    db: &DatabaseConnection,
    today: NaiveDate,
    rng: &mut StdRng,
) -> Result<bool, AppError> {
    if RoomRepository::new(db).count().await? > 0 {
        tracing::info!("Database already populated, skipping demo data");
        return Ok(false);
    }

    let txn = db.begin().await?;

    let rooms = create_rooms(&txn).await?;
    let guests = create_guests(&txn).await?;

    let mut reservations = 0;

    for _ in 0..PAST_STAYS {
        let check_in = today - Duration::days(rng.random_range(30..=150));
        let stay = stay_of(check_in, rng.random_range(2..=7))?;
        let (Some(room), Some(guest)) = (rooms.choose(rng), guests.choose(rng)) else {
            break;
        };

        insert_stay(&txn, room, guest, stay, rng, ReservationStatus::CheckedOut).await?;
        reservations += 1;
    }

    for (room, guest) in rooms.iter().zip(guests.iter()).take(CURRENT_STAYS) {
        let check_in = today - Duration::days(rng.random_range(0..=3));
        let stay = stay_of(check_in, rng.random_range(3..=7))?;

        if AvailabilityChecker::new(&txn)
            .is_available(room.id, &stay, None)
            .await?
        {
            insert_stay(&txn, room, guest, stay, rng, ReservationStatus::CheckedIn).await?;
            reservations += 1;
        }
    }

    for _ in 0..UPCOMING_STAYS {
        let check_in = today + Duration::days(rng.random_range(1..=60));
        let stay = stay_of(check_in, rng.random_range(2..=5))?;
        let (Some(room), Some(guest)) = (rooms.choose(rng), guests.choose(rng)) else {
            break;
        };

        if AvailabilityChecker::new(&txn)
            .is_available(room.id, &stay, None)
            .await?
        {
            insert_stay(&txn, room, guest, stay, rng, ReservationStatus::Confirmed).await?;
            reservations += 1;
        }
    }

    txn.commit().await?;

    tracing::info!(
        rooms = rooms.len(),
        guests = guests.len(),
        reservations,
        "Seeded demo data"
    );

    Ok(true)
}

async fn create_rooms<C: ConnectionTrait>(db: &C) -> Result<Vec<Room>, AppError> {
    let repo = RoomRepository::new(db);
    let mut rooms = Vec::with_capacity(ROOMS.len());

    for (number, category, floor, rate, amenities) in ROOMS {
        rooms.push(
            repo.create(CreateRoomParams {
                number: number.to_string(),
                category,
                floor,
                nightly_rate: Decimal::from(rate),
                amenities: amenities.to_string(),
            })
            .await?,
        );
    }

    Ok(rooms)
}

async fn create_guests<C: ConnectionTrait>(db: &C) -> Result<Vec<Guest>, AppError> {
    let repo = GuestRepository::new(db);
    let mut guests = Vec::with_capacity(GUESTS.len());

    for (first_name, last_name, document_number, nationality, email, phone) in GUESTS {
        guests.push(
            repo.create(NewGuest {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                document_number: document_number.to_string(),
                nationality: nationality.to_string(),
                email: Some(email.to_string()),
                phone: Some(phone.to_string()),
            })
            .await?,
        );
    }

    Ok(guests)
}

fn stay_of(check_in: NaiveDate, nights: i64) -> Result<StayDates, AppError> {
    Ok(StayDates::new(check_in, check_in + Duration::days(nights))?)
}

async fn insert_stay<C: ConnectionTrait>(
    db: &C,
    room: &Room,
    guest: &Guest,
    stay: StayDates,
    rng: &mut StdRng,
    status: ReservationStatus,
) -> Result<(), AppError> {
    let repo = ReservationRepository::new(db);

    let reservation = repo
        .create(NewReservation {
            room_id: room.id,
            guest_id: guest.id,
            stay,
            party_size: rng.random_range(1..=2),
            total_price: pricing::total_price(room.nightly_rate, &stay),
        })
        .await?;

    if status != reservation.status {
        repo.update_status(reservation.id, status).await?;
    }

    Ok(())
}
