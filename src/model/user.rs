use serde::{Deserialize, Serialize};

/// A user account, the password is never serialized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}
