use super::*;

/// Tests filtering rooms by category.
///
/// Expected: Ok with only the suites
#[tokio::test]
async fn returns_only_matching_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .number("101")
        .category("single")
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .number("302")
        .category("suite")
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .number("301")
        .category("suite")
        .build()
        .await?;

    let suites = RoomRepository::new(db)
        .get_by_category(RoomCategory::Suite)
        .await?;

    assert_eq!(suites.len(), 2);
    assert!(suites.iter().all(|r| r.category == RoomCategory::Suite));
    assert_eq!(suites[0].number, "301");

    Ok(())
}
