use sea_orm::entity::prelude::*;

/// Catalog table a favorite points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FavoriteType {
    #[sea_orm(string_value = "people")]
    People,
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "starship")]
    Starship,
}
