//! `PostgreSQL` repository implementation for schedule storage.

use super::{
    models::{NewScheduleRow, ScheduleRow},
    schema::schedules,
};
use crate::schedule::{
    domain::{PersistedScheduleData, Schedule, ScheduleId, ScheduleName, SchedulePeriod},
    ports::{ScheduleRepository, ScheduleRepositoryError, ScheduleRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by schedule adapters.
pub type SchedulePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed schedule repository.
#[derive(Debug, Clone)]
pub struct PostgresScheduleRepository {
    pool: SchedulePgPool,
}

impl PostgresScheduleRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: SchedulePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ScheduleRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ScheduleRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ScheduleRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ScheduleRepositoryError::persistence)?
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepository {
    async fn store(&self, schedule: &Schedule) -> ScheduleRepositoryResult<()> {
        let schedule_id = schedule.id();
        let new_row = to_new_row(schedule);

        self.run_blocking(move |connection| {
            diesel::insert_into(schedules::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ScheduleRepositoryError::DuplicateSchedule(schedule_id)
                    }
                    _ => ScheduleRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, schedule: &Schedule) -> ScheduleRepositoryResult<()> {
        let schedule_id = schedule.id();
        let name = schedule.name().as_str().to_owned();
        let description = schedule.description().to_owned();
        let period = schedule.period();
        let updated_at = schedule.updated_at();

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                schedules::table.filter(schedules::id.eq(schedule_id.into_inner())),
            )
            .set((
                schedules::name.eq(name),
                schedules::description.eq(description),
                schedules::start_date.eq(period.start_date()),
                schedules::end_date.eq(period.end_date()),
                schedules::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(ScheduleRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ScheduleRepositoryError::NotFound(schedule_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ScheduleId) -> ScheduleRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(schedules::table.filter(schedules::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(ScheduleRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(ScheduleRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ScheduleId) -> ScheduleRepositoryResult<Option<Schedule>> {
        self.run_blocking(move |connection| {
            let row = schedules::table
                .filter(schedules::id.eq(id.into_inner()))
                .select(ScheduleRow::as_select())
                .first::<ScheduleRow>(connection)
                .optional()
                .map_err(ScheduleRepositoryError::persistence)?;
            row.map(row_to_schedule).transpose()
        })
        .await
    }

    async fn list(&self) -> ScheduleRepositoryResult<Vec<Schedule>> {
        self.run_blocking(move |connection| {
            let rows = schedules::table
                .order(schedules::start_date.asc())
                .select(ScheduleRow::as_select())
                .load::<ScheduleRow>(connection)
                .map_err(ScheduleRepositoryError::persistence)?;
            rows.into_iter().map(row_to_schedule).collect()
        })
        .await
    }
}

fn to_new_row(schedule: &Schedule) -> NewScheduleRow {
    NewScheduleRow {
        id: schedule.id().into_inner(),
        name: schedule.name().as_str().to_owned(),
        description: schedule.description().to_owned(),
        start_date: schedule.period().start_date(),
        end_date: schedule.period().end_date(),
        created_by: schedule.created_by().into_inner(),
        created_at: schedule.created_at(),
        updated_at: schedule.updated_at(),
    }
}

fn row_to_schedule(row: ScheduleRow) -> ScheduleRepositoryResult<Schedule> {
    let ScheduleRow {
        id,
        name,
        description,
        start_date,
        end_date,
        created_by,
        created_at,
        updated_at,
    } = row;

    let data = PersistedScheduleData {
        id: ScheduleId::from_uuid(id),
        name: ScheduleName::new(name).map_err(ScheduleRepositoryError::persistence)?,
        description,
        period: SchedulePeriod::new(start_date, end_date)
            .map_err(ScheduleRepositoryError::persistence)?,
        created_by: UserId::from_uuid(created_by),
        created_at,
        updated_at,
    };
    Ok(Schedule::from_persisted(data))
}
