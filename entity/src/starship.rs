use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub hyperdrive_rating: Option<String>,
    pub starship_class: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
