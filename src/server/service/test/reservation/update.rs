use super::*;

/// Tests moving a reservation onto dates held by another reservation.
///
/// Expected: Err(RoomUnavailable) and the original dates kept
#[tokio::test]
async fn rejects_moving_onto_booked_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let room = factory::create_room(db).await?;
    let first = service
        .create(booking(room.id, date(6, 1), date(6, 3)))
        .await?;
    service
        .create(booking(room.id, date(6, 5), date(6, 8)))
        .await?;

    let result = service
        .update(UpdateReservationParams {
            id: first.id,
            check_out: Some(date(6, 6)),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::RoomUnavailable { .. }))
    ));
    assert_eq!(service.get_by_id(first.id).await?.stay, first.stay);

    Ok(())
}

/// Tests shifting a reservation over its own interval.
///
/// Verifies that the reservation does not conflict with itself.
///
/// Expected: Ok with new dates and price
#[tokio::test]
async fn does_not_conflict_with_itself() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let room = factory::create_room(db).await?;
    let reservation = service
        .create(booking(room.id, date(6, 1), date(6, 4)))
        .await?;

    let updated = service
        .update(UpdateReservationParams {
            id: reservation.id,
            check_in: Some(date(6, 2)),
            check_out: Some(date(6, 6)),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.stay.check_in(), date(6, 2));
    assert_eq!(updated.total_price, dec!(320.00));

    Ok(())
}

/// Tests changing only the party size.
///
/// Expected: Ok with new party size and unchanged price
#[tokio::test]
async fn updates_party_size_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;
    let reservation = ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 1), date(6, 3))
        .total_price_cents(15_000)
        .build()
        .await?;

    let updated = service
        .update(UpdateReservationParams {
            id: reservation.id,
            party_size: Some(4),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.party_size, 4);
    assert_eq!(updated.total_price, dec!(150.00));

    Ok(())
}

/// Tests an update whose dates equal the current ones.
///
/// Verifies that availability is not re-checked, so an overlapping row inserted
/// directly does not cause a rejection, and the stored price is kept.
///
/// Expected: Ok with unchanged price
#[tokio::test]
async fn same_dates_skip_availability_and_pricing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;
    let reservation = ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 1), date(6, 3))
        .total_price_cents(15_000)
        .build()
        .await?;
    ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 2), date(6, 4))
        .build()
        .await?;

    let updated = service
        .update(UpdateReservationParams {
            id: reservation.id,
            check_in: Some(date(6, 1)),
            check_out: Some(date(6, 3)),
            party_size: Some(1),
        })
        .await?;

    assert_eq!(updated.total_price, dec!(150.00));
    assert_eq!(updated.party_size, 1);

    Ok(())
}

/// Tests updates producing an invalid interval or party size.
///
/// Expected: Err(InvalidDateRange) for an inverted interval and for a stay over the
/// configured cap, Err(Validation) for an empty party
#[tokio::test]
async fn rejects_invalid_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let room = factory::create_room(db).await?;
    let reservation = service
        .create(booking(room.id, date(6, 1), date(6, 3)))
        .await?;

    let inverted = service
        .update(UpdateReservationParams {
            id: reservation.id,
            check_in: Some(date(6, 3)),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        inverted,
        Err(AppError::BookingErr(BookingError::InvalidDateRange(_)))
    ));

    let too_long = ReservationService::new(db, &locks, limited_context())
        .update(UpdateReservationParams {
            id: reservation.id,
            check_out: Some(date(7, 15)),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        too_long,
        Err(AppError::BookingErr(BookingError::InvalidDateRange(_)))
    ));

    let empty_party = service
        .update(UpdateReservationParams {
            id: reservation.id,
            party_size: Some(0),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        empty_party,
        Err(AppError::BookingErr(BookingError::Validation(_)))
    ));

    Ok(())
}

/// Tests updating cancelled and checked-out reservations.
///
/// Expected: Err(InvalidState) for both
#[tokio::test]
async fn rejects_update_of_terminal_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;

    for status in ["cancelled", "checked_out"] {
        let reservation = ReservationFactory::new(db, room.id, guest.id)
            .status(status)
            .build()
            .await?;

        let result = service
            .update(UpdateReservationParams {
                id: reservation.id,
                party_size: Some(1),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::BookingErr(BookingError::InvalidState {
                operation: LifecycleAction::Update,
                ..
            }))
        ));
    }

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Err(ReservationNotFound)
#[tokio::test]
async fn rejects_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();

    let result = ReservationService::new(db, &locks, context())
        .update(UpdateReservationParams {
            id: 404,
            party_size: Some(1),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::ReservationNotFound(404)))
    ));

    Ok(())
}
