//! User aggregate root and role membership.

use super::{EmailAddress, ParseRoleError, UserDomainError, UserId, UserName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Role held by a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Plans schedules, manages accounts, and reviews completed work.
    Admin,
    /// Executes and reports on assigned tasks.
    Worker,
}

impl Role {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Worker => "WORKER",
        }
    }

    /// Returns `true` for the administrator role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ADMIN" => Ok(Self::Admin),
            "WORKER" => Ok(Self::Worker),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// User aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    role: Role,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted display name.
    pub name: UserName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted role.
    pub role: Role,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user from validated raw inputs.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError`] when the name or email fail validation.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        clock: &impl Clock,
    ) -> Result<Self, UserDomainError> {
        Ok(Self {
            id: UserId::new(),
            name: UserName::new(name)?,
            email: EmailAddress::new(email)?,
            role,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            role: data.role,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Renames the user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] when the new name is blank.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), UserDomainError> {
        self.name = UserName::new(name)?;
        Ok(())
    }

    /// Changes the user's role.
    ///
    /// Roles are immutable in ordinary flows; this is an administrative
    /// correction and route guards must re-derive role from a fresh
    /// principal rather than trust values cached before the change.
    pub const fn change_role(&mut self, role: Role) {
        self.role = role;
    }
}
