use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationErrors};

use crate::error::{ADMIN_ACCESS_REQUIRED, OWNER_ACCESS_REQUIRED, TENANT_ACCESS_REQUIRED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Owner,
    Tenant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Owner => "owner",
            Role::Tenant => "tenant",
        }
    }

    /// Role given to a user seen for the first time.
    pub fn for_new_user(user_id: &str, owner_open_id: Option<&str>) -> Self {
        match owner_open_id {
            Some(owner) if owner == user_id => Role::Admin,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "owner" => Ok(Role::Owner),
            "tenant" => Ok(Role::Tenant),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

// Bare role inputs (`admin.getUsersByRole`) are fully checked by deserialization.
impl Validate for Role {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// The role-scoped routers. Each one admits a fixed set of roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    Admin,
    Owner,
    Tenant,
}

impl Portal {
    pub fn permits(&self, role: Role) -> bool {
        match self {
            Portal::Admin => role == Role::Admin,
            Portal::Owner => matches!(role, Role::Owner | Role::Admin),
            Portal::Tenant => matches!(role, Role::Tenant | Role::Admin),
        }
    }

    pub fn denial_message(&self) -> &'static str {
        match self {
            Portal::Admin => ADMIN_ACCESS_REQUIRED,
            Portal::Owner => OWNER_ACCESS_REQUIRED,
            Portal::Tenant => TENANT_ACCESS_REQUIRED,
        }
    }
}
