use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(pk_auto(Guest::Id))
                    .col(string(Guest::FirstName))
                    .col(string(Guest::LastName))
                    .col(string_uniq(Guest::DocumentNumber))
                    .col(string(Guest::Nationality))
                    .col(string_null(Guest::Email))
                    .col(string_null(Guest::Phone))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guest_email")
                    .table(Guest::Table)
                    .col(Guest::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guest {
    Table,
    Id,
    FirstName,
    LastName,
    DocumentNumber,
    Nationality,
    Email,
    Phone,
}
