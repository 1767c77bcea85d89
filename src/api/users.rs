//! `/users` endpoints

use crate::auth::rbac::Role;
use crate::auth::types::{RoleUpdate, User, UserId, UserUpdate};
use crate::gateway::{ApiRequest, Gateway};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> UsersApi<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn update_me(&self, update: &UserUpdate) -> Result<User> {
        self.gateway
            .send_json(ApiRequest::put_json("/users/me", update)?)
            .await
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.gateway.send_json(ApiRequest::get("/users/")).await
    }

    pub async fn update_role(&self, id: UserId, role: Role) -> Result<User> {
        let request = ApiRequest::put_json(format!("/users/{}/role", id), &RoleUpdate { role })?;
        self.gateway.send_json(request).await
    }

    pub async fn delete(&self, id: UserId) -> Result<()> {
        self.gateway
            .send(ApiRequest::delete(format!("/users/{}", id)))
            .await
            .map(|_| ())
    }
}
