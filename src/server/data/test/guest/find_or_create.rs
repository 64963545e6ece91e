use super::*;

/// Tests resolving a guest whose document is not yet stored.
///
/// Expected: Ok with a new guest row
#[tokio::test]
async fn creates_guest_for_new_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = GuestRepository::new(db)
        .find_or_create(new_guest("FR789123"))
        .await?;

    assert_eq!(guest.document_number, "FR789123");
    assert_eq!(guest.first_name, "Sophie");
    assert_eq!(Guest::find().count(db).await?, 1);

    Ok(())
}

/// Tests resolving a guest whose document is already stored.
///
/// Verifies that the existing record wins even when the supplied name differs.
///
/// Expected: Ok with the existing guest and no new row
#[tokio::test]
async fn reuses_existing_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::guest::GuestFactory::new(db)
        .document_number("FR789123")
        .build()
        .await?;

    let guest = GuestRepository::new(db)
        .find_or_create(NewGuest {
            first_name: "Someone".to_string(),
            ..new_guest("FR789123")
        })
        .await?;

    assert_eq!(guest.id, stored.id);
    assert_eq!(guest.first_name, stored.first_name);
    assert_eq!(Guest::find().count(db).await?, 1);

    Ok(())
}
