//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Tasks with their lifecycle status and assignment.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning schedule identifier.
        schedule_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Assigned worker identifier.
        assigned_to -> Uuid,
        /// Lifecycle status name (`PENDING`, `IN_PROGRESS`, ...).
        #[max_length = 50]
        status -> Varchar,
        /// Due date.
        due_date -> Timestamptz,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Latest lifecycle timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only audit trail of task lifecycle actions.
    task_logs (id) {
        /// Audit entry identifier.
        id -> Uuid,
        /// Task the entry belongs to.
        task_id -> Uuid,
        /// Action kind name (`CREATED`, `STATUS_CHANGED`, ...).
        #[max_length = 50]
        action -> Varchar,
        /// Status held before the action, if any.
        #[max_length = 50]
        from_status -> Nullable<Varchar>,
        /// Status produced by the action, if any.
        #[max_length = 50]
        to_status -> Nullable<Varchar>,
        /// Free-form note.
        note -> Nullable<Text>,
        /// Acting user identifier.
        actor -> Uuid,
        /// Recording timestamp.
        timestamp -> Timestamptz,
    }
}

diesel::table! {
    /// Photographic evidence records attached to completions.
    task_evidence (id) {
        /// Evidence identifier.
        id -> Uuid,
        /// Task the evidence belongs to.
        task_id -> Uuid,
        /// Stored photo location.
        photo_url -> Text,
        /// SHA-256 hex digest of the photo bytes.
        #[max_length = 64]
        content_digest -> Varchar,
        /// Caller-supplied metadata.
        metadata -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(task_logs -> tasks (task_id));
diesel::joinable!(task_evidence -> tasks (task_id));

diesel::allow_tables_to_appear_in_same_query!(tasks, task_logs, task_evidence);
