//! Typed references to catalog entities.
//!
//! A favorite points at one row in one of three unrelated tables. [`EntityRef`] carries the
//! table and a strongly typed id together so a people id can never be used to look up a planet.

use std::fmt;

use entity::sea_orm_active_enums::FavoriteType;

use crate::model::favorite::FavoriteKind;

/// Primary key of a `people` record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PeopleId(pub i32);

/// Primary key of a `planets` record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanetId(pub i32);

/// Primary key of a `starships` record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StarshipId(pub i32);

/// Reference to a single catalog entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// A character from the `people` table.
    People(PeopleId),
    /// A record from the `planets` table.
    Planet(PlanetId),
    /// A record from the `starships` table.
    Starship(StarshipId),
}

impl EntityRef {
    /// Builds a reference from the API kind and raw id taken from a request path.
    pub fn new(kind: FavoriteKind, id: i32) -> Self {
        match kind {
            FavoriteKind::People => Self::People(PeopleId(id)),
            FavoriteKind::Planet => Self::Planet(PlanetId(id)),
            FavoriteKind::Starship => Self::Starship(StarshipId(id)),
        }
    }

    /// Rebuilds a reference from the columns stored on a favorite row.
    pub fn from_columns(favorite_type: FavoriteType, favorite_id: i32) -> Self {
        Self::new(favorite_type.into(), favorite_id)
    }

    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::People(_) => FavoriteKind::People,
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Starship(_) => FavoriteKind::Starship,
        }
    }

    /// Value stored in the `favorite_type` column
    pub fn favorite_type(&self) -> FavoriteType {
        self.kind().into()
    }

    /// Value stored in the `favorite_id` column
    pub fn id(&self) -> i32 {
        match self {
            Self::People(PeopleId(id))
            | Self::Planet(PlanetId(id))
            | Self::Starship(StarshipId(id)) => *id,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ID {}", self.kind().label(), self.id())
    }
}
