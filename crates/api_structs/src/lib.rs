mod contact;
mod dashboard;
mod history;
mod reminder;
mod status;
mod user;
mod webhook;

pub mod dtos {
    pub use crate::contact::dtos::*;
    pub use crate::dashboard::dtos::*;
    pub use crate::history::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::contact::api::*;
pub use crate::dashboard::api::*;
pub use crate::history::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
pub use crate::webhook::api::*;
