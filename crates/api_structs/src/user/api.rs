use crate::dtos::UserDTO;
use followup_domain::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: UserDTO,
}

impl UserResponse {
    pub fn new(user: User) -> Self {
        Self {
            user: UserDTO::new(user),
        }
    }
}

pub mod get_me {
    use super::*;

    pub type APIResponse = UserResponse;
}

pub mod create_user {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub email: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub user: UserDTO,
        /// Only returned once, at creation
        pub secret_api_key: String,
    }

    impl APIResponse {
        pub fn new(user: User) -> Self {
            Self {
                secret_api_key: user.secret_api_key.clone(),
                user: UserDTO::new(user),
            }
        }
    }
}

pub mod update_me {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub display_name: Option<String>,
        #[serde(default)]
        pub business_name: Option<String>,
        #[serde(default)]
        pub phone_number: Option<String>,
    }

    pub type APIResponse = UserResponse;
}

pub mod delete_me {
    use super::*;

    pub type APIResponse = UserResponse;
}
