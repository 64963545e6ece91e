use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250601_000001_create_room_table::Room, m20250601_000002_create_guest_table::Guest};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::RoomId))
                    .col(integer(Reservation::GuestId))
                    .col(date(Reservation::CheckIn))
                    .col(date(Reservation::CheckOut))
                    .col(integer(Reservation::PartySize))
                    .col(big_integer(Reservation::TotalPriceCents))
                    .col(string(Reservation::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_guest_id")
                            .from(Reservation::Table, Reservation::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability lookups filter by room first, then by the stay window
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_room_dates")
                    .table(Reservation::Table)
                    .col(Reservation::RoomId)
                    .col(Reservation::CheckIn)
                    .col(Reservation::CheckOut)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_status")
                    .table(Reservation::Table)
                    .col(Reservation::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    RoomId,
    GuestId,
    CheckIn,
    CheckOut,
    PartySize,
    TotalPriceCents,
    Status,
}
