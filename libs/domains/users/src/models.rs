use axum_helpers::validation::non_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Unique across users
    pub email: String,
}

impl From<entity::user::Model> for User {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}

impl User {
    /// Overwrite the fields present in `update`
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

/// Body of `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(custom(function = "non_blank"))]
    #[schema(example = "Alice")]
    pub name: String,

    #[validate(custom(function = "non_blank"), email)]
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Body of `PATCH /users/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(custom(function = "non_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "non_blank"), email)]
    pub email: Option<String>,
}
