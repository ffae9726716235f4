//! User resource: record, creation draft, and field patch.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::store::Resource;

/// One user in the accounts collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier, unique within the collection.
    #[schema(example = 1)]
    pub id: u64,
    /// Full name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// National identity card number (cédula de identidad).
    #[schema(example = 40123456)]
    pub ci: u64,
    /// Account password. Stored as supplied; there is no authentication layer.
    pub password: String,
    /// Whether the user has administrative privileges.
    pub is_admin: bool,
}

/// Fields accepted when creating a user; the id is store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// National identity card number.
    pub ci: u64,
    /// Account password.
    pub password: String,
    /// Whether the user has administrative privileges.
    pub is_admin: bool,
}

/// Partial overwrite for an update; absent fields keep their current value.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New full name, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email address, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New identity card number, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<u64>,
    /// New password, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New admin flag, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl Resource for User {
    type Draft = UserDraft;
    type Patch = UserPatch;

    fn from_draft(id: u64, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            ci: draft.ci,
            password: draft.password,
            is_admin: draft.is_admin,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(ci) = patch.ci {
            self.ci = ci;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(is_admin) = patch.is_admin {
            self.is_admin = is_admin;
        }
    }
}
