use super::*;

/// Tests checking in a confirmed reservation.
///
/// Expected: Ok with status checked_in persisted
#[tokio::test]
async fn checks_in_confirmed_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let checked_in = service.check_in(reservation.id).await?;

    assert_eq!(checked_in.status, ReservationStatus::CheckedIn);
    assert_eq!(
        service.get_by_id(reservation.id).await?.status,
        ReservationStatus::CheckedIn
    );

    Ok(())
}

/// Tests checking in twice.
///
/// Expected: Err(InvalidState) carrying status checked_in
#[tokio::test]
async fn rejects_second_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    service.check_in(reservation.id).await?;
    let result = service.check_in(reservation.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidState {
            operation: LifecycleAction::CheckIn,
            status: ReservationStatus::CheckedIn,
        }))
    ));

    Ok(())
}

/// Tests cancelling a confirmed and a checked-in reservation.
///
/// Expected: Ok with status cancelled for both
#[tokio::test]
async fn cancels_active_reservations() -> Result<(), AppError> {
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

    for status in ["confirmed", "checked_in"] {
        let reservation = ReservationFactory::new(db, room.id, guest.id)
            .status(status)
            .build()
            .await?;

        let cancellation = service.cancel(reservation.id).await?;

        assert_eq!(cancellation.reservation_id, reservation.id);
        assert_eq!(cancellation.status, ReservationStatus::Cancelled);
    }

    Ok(())
}

/// Tests cancelling an already cancelled reservation.
///
/// Expected: Ok with status cancelled
#[tokio::test]
async fn cancel_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    service.cancel(reservation.id).await?;
    let again = service.cancel(reservation.id).await?;

    assert_eq!(again.status, ReservationStatus::Cancelled);

    Ok(())
}

/// Tests cancelling a checked-out reservation.
///
/// Expected: Err(InvalidState) and status still checked_out
#[tokio::test]
async fn rejects_cancel_after_check_out() -> Result<(), AppError> {
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
        .status("checked_out")
        .build()
        .await?;

    let result = service.cancel(reservation.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidState {
            operation: LifecycleAction::Cancel,
            status: ReservationStatus::CheckedOut,
        }))
    ));
    assert_eq!(
        service.get_by_id(reservation.id).await?.status,
        ReservationStatus::CheckedOut
    );

    Ok(())
}

/// Tests checking in a cancelled reservation.
///
/// Expected: Err(InvalidState) carrying status cancelled
#[tokio::test]
async fn rejects_check_in_after_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    service.cancel(reservation.id).await?;
    let result = service.check_in(reservation.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidState {
            status: ReservationStatus::Cancelled,
            ..
        }))
    ));

    Ok(())
}

/// Tests lifecycle operations on a reservation that does not exist.
///
/// Expected: Err(ReservationNotFound) for get, check-in, check-out and cancel
#[tokio::test]
async fn rejects_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLockService::new();
    let service = ReservationService::new(db, &locks, context());

    assert!(matches!(
        service.get_by_id(7).await,
        Err(AppError::BookingErr(BookingError::ReservationNotFound(7)))
    ));
    assert!(matches!(
        service.check_in(7).await,
        Err(AppError::BookingErr(BookingError::ReservationNotFound(7)))
    ));
    assert!(matches!(
        service.check_out(7).await,
        Err(AppError::BookingErr(BookingError::ReservationNotFound(7)))
    ));
    assert!(matches!(
        service.cancel(7).await,
        Err(AppError::BookingErr(BookingError::ReservationNotFound(7)))
    ));

    Ok(())
}

/// Tests that cancelling frees the room for a new booking.
///
/// Expected: Ok for a booking over the cancelled interval
#[tokio::test]
async fn cancelled_reservation_frees_room() -> Result<(), AppError> {
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

    service.cancel(reservation.id).await?;

    let rebooked = service
        .create(booking(room.id, date(6, 2), date(6, 4)))
        .await?;
    assert_eq!(rebooked.status, ReservationStatus::Confirmed);

    Ok(())
}
