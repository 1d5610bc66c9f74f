//! Authenticated actors and role-based access guards.

use crate::user::domain::{Role, User, UserId};
use thiserror::Error;

/// Identity and role of the actor performing an operation.
///
/// A principal is always built from a freshly fetched user record (the
/// `/auth/me` endpoint on the client side, a repository load on the server
/// side), never from a role value cached before the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    user_id: UserId,
    role: Role,
}

impl Principal {
    /// Creates a principal from an identifier and role.
    #[must_use]
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Creates a principal from a user record.
    #[must_use]
    pub const fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id(),
            role: user.role(),
        }
    }

    /// Returns the actor's user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the actor's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Requires the administrator role.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AdminRequired`] for any other role.
    pub const fn ensure_admin(&self) -> Result<(), AccessError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(AccessError::AdminRequired {
                actor: self.user_id,
            })
        }
    }

    /// Requires the actor to be the given assignee.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotAssignee`] when the actor is someone else.
    pub fn ensure_assignee(&self, assigned_to: UserId) -> Result<(), AccessError> {
        if self.user_id == assigned_to {
            Ok(())
        } else {
            Err(AccessError::NotAssignee {
                actor: self.user_id,
                assigned_to,
            })
        }
    }
}

/// Role or ownership check failures.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The operation requires the administrator role.
    #[error("user {actor} lacks the administrator role")]
    AdminRequired {
        /// The acting user.
        actor: UserId,
    },

    /// The operation is reserved for the task's assignee.
    #[error("user {actor} is not the assignee (task is assigned to {assigned_to})")]
    NotAssignee {
        /// The acting user.
        actor: UserId,
        /// The user the task is assigned to.
        assigned_to: UserId,
    },
}
