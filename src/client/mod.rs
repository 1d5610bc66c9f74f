//! Typed REST client for the Cronobra backend.
//!
//! The client stack mirrors the layering of the server core: the
//! [`transport`] module owns the HTTP edge (bearer auth, field-casing
//! transform, 401 handling, bounded timeout, read-only retry), the
//! [`services`] modules expose one typed function per REST endpoint, and
//! [`cache`] holds fetched results with an explicit mutation-driven
//! invalidation table.

pub mod cache;
pub mod casing;
pub mod error;
pub mod services;
pub mod transport;
