//! Customer / user identity and the signed-in profile

use crate::lifecycle::Role;
use crate::util::{lenient_i64, lenient_opt_string};
use serde::{Deserialize, Serialize};

/// Identity record returned by `GET /api/Customer/{id}` or `GET /api/User/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "IdentityWire")]
pub struct Identity {
    pub id: i64,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub cccd: Option<String>,
    pub role: Option<Role>,
}

/// Customer and user records name the same things differently and a
/// customer row may carry both `customerId` and `userId`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct IdentityWire {
    #[serde(deserialize_with = "lenient_i64")]
    id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    customer_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    user_id: i64,
    full_name: Option<String>,
    customer_name: Option<String>,
    name: Option<String>,
    username: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    phone: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    phone_number: Option<String>,
    email: Option<String>,
    address: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    cccd: Option<String>,
    role: Option<Role>,
}

impl From<IdentityWire> for Identity {
    fn from(w: IdentityWire) -> Self {
        let id = [w.customer_id, w.user_id, w.id]
            .into_iter()
            .find(|id| *id != 0)
            .unwrap_or_default();
        Self {
            id,
            full_name: w.full_name.or(w.customer_name).or(w.name),
            username: w.username,
            phone: w.phone.or(w.phone_number),
            email: w.email,
            address: w.address,
            cccd: w.cccd,
            role: w.role,
        }
    }
}

impl Identity {
    /// Name to show: full name, else username, else `#id`
    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Signed-in operator, persisted under the session key `user`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub role: Role,
}

impl UserProfile {
    pub fn is_evm_staff(&self) -> bool {
        self.role.is_evm_staff()
    }
}
