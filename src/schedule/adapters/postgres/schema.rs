//! Diesel schema for schedule persistence.

diesel::table! {
    /// Construction schedules with bounded date ranges.
    schedules (id) {
        /// Schedule identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Start of the schedule period.
        start_date -> Timestamptz,
        /// End of the schedule period.
        end_date -> Timestamptz,
        /// Creating administrator.
        created_by -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
