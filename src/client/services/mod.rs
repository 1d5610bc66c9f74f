//! Typed wrappers over the backend REST surface, one function per
//! endpoint.

mod auth;
mod evidence;
mod schedules;
mod tasks;
mod users;

pub use auth::{AuthService, LoginRequest, LoginResponse, RegisterAdminRequest};
pub use evidence::EvidenceService;
pub use schedules::{ScheduleChanges, SchedulePayload, ScheduleService};
pub use tasks::{NewTask, TaskService};
pub use users::{NewUser, UserChanges, UserService};

use crate::client::error::ApiResult;
use serde::de::DeserializeOwned;
use serde_json::Value;

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    Ok(serde_json::from_value(value)?)
}
