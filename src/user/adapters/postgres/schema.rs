//! Diesel schema for user directory persistence.

diesel::table! {
    /// User accounts with role membership and credential digests.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Normalized email address, unique across accounts.
        #[max_length = 255]
        email -> Varchar,
        /// Role name (`ADMIN` or `WORKER`).
        #[max_length = 50]
        role -> Varchar,
        /// SHA-256 hex digest of the account password.
        #[max_length = 64]
        password_digest -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
