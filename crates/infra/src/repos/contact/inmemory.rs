use super::IContactRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chrono::{DateTime, Utc};
use followup_domain::{Contact, ID};

pub struct InMemoryContactRepo {
    contacts: std::sync::Mutex<Vec<Contact>>,
}

impl InMemoryContactRepo {
    pub fn new() -> Self {
        Self {
            contacts: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IContactRepo for InMemoryContactRepo {
    async fn insert(&self, contact: &Contact) -> anyhow::Result<()> {
        insert(contact, &self.contacts);
        Ok(())
    }

    async fn save(&self, contact: &Contact) -> anyhow::Result<()> {
        update_one(&contact.id, &self.contacts, |stored| {
            stored.name = contact.name.clone();
            stored.email = contact.email.clone();
            stored.phone = contact.phone.clone();
            stored.status = contact.status;
            true
        });
        Ok(())
    }

    async fn update_last_contacted(
        &self,
        contact_id: &ID,
        last_contacted: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        update_one(contact_id, &self.contacts, |stored| {
            stored.last_contacted = Some(last_contacted);
            true
        });
        Ok(())
    }

    async fn delete(&self, contact_id: &ID) -> Option<Contact> {
        delete(contact_id, &self.contacts)
    }

    async fn find(&self, contact_id: &ID) -> Option<Contact> {
        find(contact_id, &self.contacts)
    }

    async fn find_many(&self, contact_ids: &[ID]) -> anyhow::Result<Vec<Contact>> {
        Ok(find_by(&self.contacts, |c| contact_ids.contains(&c.id)))
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Contact> {
        let mut contacts = find_by(&self.contacts, |c| c.user_id == *user_id);
        contacts.sort_by(|c1, c2| c2.created_at.cmp(&c1.created_at));
        contacts
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.contacts, |c| c.user_id == *user_id))
    }
}
