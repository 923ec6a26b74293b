//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,

    /// Default delivery address, offered as a saved address at checkout.
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
