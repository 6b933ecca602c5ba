use crate::dtos::ContactDTO;
use followup_domain::{Contact, ContactStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub contact: ContactDTO,
}

impl ContactResponse {
    pub fn new(contact: Contact) -> Self {
        Self {
            contact: ContactDTO::new(contact),
        }
    }
}

pub mod create_contact {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub email: String,
        pub phone: String,
    }

    pub type APIResponse = ContactResponse;
}

pub mod get_contacts {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub contacts: Vec<ContactDTO>,
    }

    impl APIResponse {
        pub fn new(contacts: Vec<Contact>) -> Self {
            Self {
                contacts: contacts.into_iter().map(ContactDTO::new).collect(),
            }
        }
    }
}

pub mod get_contact {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub contact_id: ID,
    }

    pub type APIResponse = ContactResponse;
}

pub mod update_contact {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub status: Option<ContactStatus>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub contact_id: ID,
    }

    pub type APIResponse = ContactResponse;
}

pub mod delete_contact {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub contact_id: ID,
    }

    pub type APIResponse = ContactResponse;
}
