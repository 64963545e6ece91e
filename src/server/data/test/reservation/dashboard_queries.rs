use super::*;

/// Tests the arrivals query.
///
/// Verifies that only confirmed reservations checking in on the day are returned.
///
/// Expected: Ok with the single confirmed arrival
#[tokio::test]
async fn finds_confirmed_arrivals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;

    let arriving = ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 1), date(6, 3))
        .build()
        .await?;
    ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 1), date(6, 3))
        .status("cancelled")
        .build()
        .await?;
    ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 2), date(6, 3))
        .build()
        .await?;

    let arrivals = ReservationRepository::new(db)
        .find_arrivals(date(6, 1))
        .await?;

    assert_eq!(arrivals.len(), 1);
    assert_eq!(arrivals[0].id, arriving.id);
    assert_eq!(arrivals[0].guest.id, guest.id);

    Ok(())
}

/// Tests the departures query.
///
/// Verifies that only checked-in reservations checking out on the day are returned.
///
/// Expected: Ok with the single checked-in departure
#[tokio::test]
async fn finds_checked_in_departures() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;

    let leaving = ReservationFactory::new(db, room.id, guest.id)
        .dates(date(5, 30), date(6, 3))
        .status("checked_in")
        .build()
        .await?;
    ReservationFactory::new(db, room.id, guest.id)
        .dates(date(5, 30), date(6, 3))
        .status("confirmed")
        .build()
        .await?;

    let departures = ReservationRepository::new(db)
        .find_departures(date(6, 3))
        .await?;

    assert_eq!(departures.len(), 1);
    assert_eq!(departures[0].id, leaving.id);

    Ok(())
}

/// Tests the occupancy query.
///
/// Verifies that checked-in stays covering the day are returned and that the check-out
/// day itself no longer counts as occupied.
///
/// Expected: Ok with the stay on 06-02, nothing on 06-03
#[tokio::test]
async fn finds_stays_occupying_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db).await?;

    let staying = ReservationFactory::new(db, room.id, guest.id)
        .dates(date(6, 1), date(6, 3))
        .status("checked_in")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    let occupying = repo.find_occupying(date(6, 2)).await?;
    assert_eq!(occupying.len(), 1);
    assert_eq!(occupying[0].id, staying.id);

    assert!(repo.find_occupying(date(6, 3)).await?.is_empty());

    Ok(())
}
