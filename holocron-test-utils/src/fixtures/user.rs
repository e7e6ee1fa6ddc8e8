use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl UserFixtures<'_> {
    /// Insert an active user with the standard test password.
    pub async fn insert_user(
        &self,
        email: &str,
        username: &str,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set("test_password".to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
