//! Session and authorization primitives for Cronobra.
//!
//! Authentication is binary at the client edge: a session is authenticated
//! iff a non-empty access token is stored. That is necessary, never
//! sufficient; the backend validates every request independently, and role
//! checks are always derived from a freshly fetched principal rather than
//! from cached data.
//!
//! - Session tokens and the [`SessionStore`] port in [`session`]
//! - Authenticated actors and access guards in [`principal`]
//! - Store adapters (in-memory, capability-scoped file) in [`adapters`]

pub mod adapters;
pub mod principal;
pub mod session;

pub use principal::{AccessError, Principal};
pub use session::{SessionStore, SessionStoreError, TokenPair};
