use super::{IUserRepo, InsertUserError};
use crate::repos::shared::inmemory_repo::*;
use followup_domain::{User, UserProfile, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> Result<(), InsertUserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(InsertUserError::EmailTaken(user.email.clone()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        update_one(&user.id, &self.users, |stored| {
            stored.email = user.email.clone();
            stored.secret_api_key = user.secret_api_key.clone();
            stored.subscription = user.subscription.clone();
            true
        });
        Ok(())
    }

    async fn update_profile(&self, user_id: &ID, profile: &UserProfile) -> anyhow::Result<()> {
        update_one(user_id, &self.users, |stored| {
            stored.profile = profile.clone();
            true
        });
        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        delete(user_id, &self.users)
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_by_apikey(&self, api_key: &str) -> Option<User> {
        find_by(&self.users, |u| u.secret_api_key == api_key)
            .into_iter()
            .next()
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        find_by(&self.users, |u| u.email == email).into_iter().next()
    }
}
