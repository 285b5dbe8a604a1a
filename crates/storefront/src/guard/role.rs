use serde::{Deserialize, Serialize};
use shared::{
    config::Claims,
    domain::responses::{AuthUser, UserType},
};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Company,
    Individual,
}

impl From<UserType> for Role {
    fn from(value: UserType) -> Self {
        match value {
            UserType::Company => Role::Company,
            UserType::Individual => Role::Individual,
        }
    }
}

impl Role {
    /// Admin satisfies every requirement; other roles only their own.
    pub fn admits(self, required: Option<Role>) -> bool {
        match required {
            None => true,
            Some(required) => self == Role::Admin || self == required,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Company => "company",
            Role::Individual => "individual",
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
            "admin" => Ok(Role::Admin),
            "company" => Ok(Role::Company),
            "individual" => Ok(Role::Individual),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// The role authorization decisions are made with.
pub fn effective_role(claims: &Claims) -> Role {
    if claims.is_admin {
        Role::Admin
    } else {
        Role::from(claims.user_type)
    }
}

/// Same rule applied to a cached profile, whose user type may be unknown.
pub fn profile_role(user: &AuthUser) -> Option<Role> {
    if user.is_admin {
        Some(Role::Admin)
    } else {
        user.user_type.map(Role::from)
    }
}
