use super::*;

/// Tests the overlap predicate against a confirmed 06-01 → 06-03 stay.
///
/// Verifies that a shared night conflicts while touching intervals on either side do not.
///
/// Expected: 1 for 06-02 → 06-04, 0 for 06-03 → 06-05 and 05-30 → 06-01
#[tokio::test]
async fn counts_only_overlapping_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let repo = ReservationRepository::new(db);

    assert_eq!(
        repo.count_blocking_overlaps(room.id, &stay((6, 2), (6, 4)), None)
            .await?,
        1
    );
    assert_eq!(
        repo.count_blocking_overlaps(room.id, &stay((6, 3), (6, 5)), None)
            .await?,
        0
    );
    assert_eq!(
        repo.count_blocking_overlaps(room.id, &stay((5, 30), (6, 1)), None)
            .await?,
        0
    );
    assert_eq!(
        repo.count_blocking_overlaps(room.id, &stay((5, 20), (6, 20)), None)
            .await?,
        1
    );

    Ok(())
}

/// Tests that cancelled and checked-out reservations never block a room.
///
/// Expected: 0 overlaps for the same interval
#[tokio::test]
async fn ignores_non_blocking_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;

    ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 1), date(6, 3))
        .status("cancelled")
        .build()
        .await?;
    ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 1), date(6, 3))
        .status("checked_out")
        .build()
        .await?;

    let count = ReservationRepository::new(db)
        .count_blocking_overlaps(room.id, &stay((6, 1), (6, 3)), None)
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests that a checked-in reservation blocks a room.
///
/// Expected: 1 overlap
#[tokio::test]
async fn counts_checked_in_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;

    ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 1), date(6, 3))
        .status("checked_in")
        .build()
        .await?;

    let count = ReservationRepository::new(db)
        .count_blocking_overlaps(room.id, &stay((6, 2), (6, 5)), None)
        .await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests excluding a reservation from its own overlap check.
///
/// Expected: 0 when the only overlapping reservation is excluded
#[tokio::test]
async fn excludes_given_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, _, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let count = ReservationRepository::new(db)
        .count_blocking_overlaps(room.id, &stay((6, 1), (6, 10)), Some(reservation.id))
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests that reservations in other rooms are not counted.
///
/// Expected: 0 for a different room over the same interval
#[tokio::test]
async fn ignores_other_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_room = factory::create_room(db).await?;

    let count = ReservationRepository::new(db)
        .count_blocking_overlaps(other_room.id, &stay((6, 1), (6, 3)), None)
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
