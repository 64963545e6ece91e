use super::*;

/// Tests inserting a reservation.
///
/// Verifies that the reservation is stored as confirmed and returned with its room and
/// guest attached.
///
/// Expected: Ok with hydrated reservation
#[tokio::test]
async fn creates_confirmed_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;

    let reservation = ReservationRepository::new(db)
        .create(NewReservation {
            room_id: room.id,
            guest_id: guest.id,
            stay: stay((6, 1), (6, 3)),
            party_size: 2,
            total_price: dec!(160.00),
        })
        .await?;

    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.room.id, room.id);
    assert_eq!(reservation.guest.document_number, guest.document_number);
    assert_eq!(reservation.total_price, dec!(160.00));
    assert_eq!(reservation.stay.nights(), 2);

    Ok(())
}

/// Tests inserting a reservation for a room that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let result = ReservationRepository::new(db)
        .create(NewReservation {
            room_id: 999,
            guest_id: guest.id,
            stay: stay((6, 1), (6, 3)),
            party_size: 1,
            total_price: dec!(160.00),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests fetching a reservation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_by_id_returns_none_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ReservationRepository::new(db).get_by_id(42).await?.is_none());

    Ok(())
}
