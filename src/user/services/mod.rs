//! Application services for the user directory.

mod directory;

pub use directory::{
    CreateWorkerRequest, RegisterAdminRequest, UpdateUserRequest, UserDirectoryError,
    UserDirectoryResult, UserDirectoryService,
};
