use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starships::Table)
                    .if_not_exists()
                    .col(pk_auto(Starships::Id))
                    .col(string_len(Starships::Name, 250))
                    .col(string_len_null(Starships::Model, 250))
                    .col(string_len_null(Starships::Manufacturer, 250))
                    .col(string_len_null(Starships::CostInCredits, 50))
                    .col(string_len_null(Starships::Length, 50))
                    .col(string_len_null(Starships::Crew, 50))
                    .col(string_len_null(Starships::Passengers, 50))
                    .col(string_len_null(Starships::MaxAtmospheringSpeed, 50))
                    .col(string_len_null(Starships::HyperdriveRating, 50))
                    .col(string_len_null(Starships::StarshipClass, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starships::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Starships {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    Length,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    HyperdriveRating,
    StarshipClass,
}
