use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250131_000004_user::Users;

static IDX_FAVORITES_USER_TARGET: &str = "idx-favorites-user_id-favorite_type-favorite_id";
static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add constraints to an existing table, keep the foreign key inline
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(string_len(Favorites::FavoriteType, 16))
                    .col(integer(Favorites::FavoriteId))
                    .col(timestamp(Favorites::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_TARGET)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::FavoriteType)
                    .col(Favorites::FavoriteId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_TARGET)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    FavoriteType,
    FavoriteId,
    CreatedAt,
}
