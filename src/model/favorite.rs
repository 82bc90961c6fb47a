use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::FavoriteType;
use serde::{Deserialize, Serialize};

/// Catalog kind a favorite can point at, as it appears in paths and payloads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    People,
    Planet,
    Starship,
}

impl FavoriteKind {
    /// Human readable name used in response messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::People => "character",
            Self::Planet => "planet",
            Self::Starship => "starship",
        }
    }
}

impl From<FavoriteType> for FavoriteKind {
    fn from(favorite_type: FavoriteType) -> Self {
        match favorite_type {
            FavoriteType::People => Self::People,
            FavoriteType::Planet => Self::Planet,
            FavoriteType::Starship => Self::Starship,
        }
    }
}

impl From<FavoriteKind> for FavoriteType {
    fn from(kind: FavoriteKind) -> Self {
        match kind {
            FavoriteKind::People => Self::People,
            FavoriteKind::Planet => Self::Planet,
            FavoriteKind::Starship => Self::Starship,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub favorite_type: FavoriteKind,
    pub favorite_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            favorite_type: favorite.favorite_type.into(),
            favorite_id: favorite.favorite_id,
            created_at: favorite.created_at,
        }
    }
}
