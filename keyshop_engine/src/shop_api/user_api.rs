use std::fmt::Debug;

use log::*;

use crate::{db_types::NewUser, shop_api::errors::UserApiError, traits::ShopDatabase};

/// `UserApi` tracks the shop's customers.
#[derive(Clone)]
pub struct UserApi<B> {
    db: B,
}

impl<B> Debug for UserApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserApi")
    }
}

impl<B> UserApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> UserApi<B>
where B: ShopDatabase
{
    /// Registers the caller as a customer. Re-registering a known identity is a no-op; the profile stored on
    /// first contact is never overwritten.
    pub async fn register_user(&self, user: NewUser) -> Result<(), UserApiError> {
        let user_id = user.user_id;
        self.db.upsert_user(user).await?;
        trace!("👤️ User {user_id} is registered");
        Ok(())
    }
}
