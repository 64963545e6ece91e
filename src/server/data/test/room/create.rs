use super::*;

fn params(number: &str) -> CreateRoomParams {
    CreateRoomParams {
        number: number.to_string(),
        category: RoomCategory::Double,
        floor: 2,
        nightly_rate: dec!(120.00),
        amenities: "WiFi, TV, Minibar".to_string(),
    }
}

/// Tests creating a room.
///
/// Verifies that the category is stored as its tag and the rate survives the cents
/// conversion.
///
/// Expected: Ok with room created
#[tokio::test]
async fn creates_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo.create(params("201")).await?;

    assert_eq!(room.number, "201");
    assert_eq!(room.category, RoomCategory::Double);
    assert_eq!(room.nightly_rate, dec!(120.00));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests creating two rooms with the same number.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    repo.create(params("201")).await?;
    let result = repo.create(params("201")).await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
