use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len(People::Name, 250))
                    .col(string_len_null(People::Height, 50))
                    .col(string_len_null(People::Mass, 50))
                    .col(string_len_null(People::HairColor, 50))
                    .col(string_len_null(People::SkinColor, 50))
                    .col(string_len_null(People::EyeColor, 50))
                    .col(string_len_null(People::BirthYear, 50))
                    .col(string_len_null(People::Gender, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
}
