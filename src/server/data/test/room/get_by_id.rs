use super::*;

/// Tests fetching an existing room.
///
/// Expected: Ok(Some) with matching number
#[tokio::test]
async fn returns_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_room(db).await?;

    let room = RoomRepository::new(db).get_by_id(created.id).await?;

    assert!(room.is_some());
    assert_eq!(room.unwrap().number, created.number);

    Ok(())
}

/// Tests fetching a room that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = RoomRepository::new(db).get_by_id(999).await?;

    assert!(room.is_none());

    Ok(())
}

/// Tests fetching a room whose stored category tag is unknown.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::room::RoomFactory::new(db)
        .category("penthouse")
        .build()
        .await?;

    let result = RoomRepository::new(db).get_by_id(created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
