//! Application services for schedule planning.

mod planning;

pub use planning::{
    CreateScheduleRequest, SchedulePlanningError, SchedulePlanningResult, SchedulePlanningService,
    UpdateScheduleRequest,
};
