//! `PostgreSQL` repository implementation for task lifecycle storage.
//!
//! Transition writes run inside a transaction and filter the `UPDATE` by
//! the status the service read the task in. A zero-row update means a
//! concurrent transition won the race; the adapter re-reads the stored
//! status to report what actually holds.

use super::{
    models::{EvidenceRow, NewEvidenceRow, NewTaskLogRow, NewTaskRow, TaskLogRow, TaskRow},
    schema::{task_evidence, task_logs, tasks},
};
use crate::schedule::domain::ScheduleId;
use crate::task::{
    domain::{
        Evidence, EvidenceId, LogAction, PersistedEvidenceData, PersistedTaskData,
        PersistedTaskLogData, Task, TaskId, TaskLog, TaskLogId, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: &Task, log: &TaskLog) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let task_row = to_new_task_row(task);
        let log_row = to_new_log_row(log);

        self.run_blocking(move |connection| {
            connection.transaction(|connection| {
                diesel::insert_into(tasks::table)
                    .values(&task_row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            TaskRepositoryError::DuplicateTask(task_id)
                        }
                        _ => TaskRepositoryError::persistence(err),
                    })?;
                diesel::insert_into(task_logs::table)
                    .values(&log_row)
                    .execute(connection)?;
                Ok(())
            })
        })
        .await
    }

    async fn apply_transition(
        &self,
        task: &Task,
        expected_from: TaskStatus,
        log: &TaskLog,
    ) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let status = task.status().as_str().to_owned();
        let updated_at = task.updated_at();
        let log_row = to_new_log_row(log);

        self.run_blocking(move |connection| {
            connection.transaction(|connection| {
                guarded_status_update(
                    connection,
                    task_id,
                    expected_from,
                    &status,
                    updated_at,
                )?;
                diesel::insert_into(task_logs::table)
                    .values(&log_row)
                    .execute(connection)?;
                Ok(())
            })
        })
        .await
    }

    async fn apply_completion(
        &self,
        task: &Task,
        expected_from: TaskStatus,
        evidence: &Evidence,
        log: &TaskLog,
    ) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let status = task.status().as_str().to_owned();
        let updated_at = task.updated_at();
        let evidence_row = to_new_evidence_row(evidence);
        let log_row = to_new_log_row(log);

        self.run_blocking(move |connection| {
            connection.transaction(|connection| {
                guarded_status_update(
                    connection,
                    task_id,
                    expected_from,
                    &status,
                    updated_at,
                )?;
                diesel::insert_into(task_evidence::table)
                    .values(&evidence_row)
                    .execute(connection)?;
                diesel::insert_into(task_logs::table)
                    .values(&log_row)
                    .execute(connection)?;
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_schedule(&self, schedule_id: ScheduleId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::schedule_id.eq(schedule_id.into_inner()))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_assignee(&self, assigned_to: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::assigned_to.eq(assigned_to.into_inner()))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count_for_schedule(&self, schedule_id: ScheduleId) -> TaskRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let count = tasks::table
                .filter(tasks::schedule_id.eq(schedule_id.into_inner()))
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            usize::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn logs_for_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskLog>> {
        self.run_blocking(move |connection| {
            let rows = task_logs::table
                .filter(task_logs::task_id.eq(task_id.into_inner()))
                .order(task_logs::timestamp.desc())
                .select(TaskLogRow::as_select())
                .load::<TaskLogRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_log).collect()
        })
        .await
    }

    async fn evidence_for_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<Evidence>> {
        self.run_blocking(move |connection| {
            let rows = task_evidence::table
                .filter(task_evidence::task_id.eq(task_id.into_inner()))
                .order(task_evidence::created_at.asc())
                .select(EvidenceRow::as_select())
                .load::<EvidenceRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_evidence).collect()
        })
        .await
    }
}

/// Applies a status write filtered by the status the caller read.
///
/// Zero updated rows means either the task is gone or its status moved
/// underneath the caller; the follow-up read distinguishes the two.
fn guarded_status_update(
    connection: &mut PgConnection,
    task_id: TaskId,
    expected_from: TaskStatus,
    status: &str,
    updated_at: chrono::DateTime<chrono::Utc>,
) -> TaskRepositoryResult<()> {
    let updated = diesel::update(
        tasks::table
            .filter(tasks::id.eq(task_id.into_inner()))
            .filter(tasks::status.eq(expected_from.as_str())),
    )
    .set((tasks::status.eq(status), tasks::updated_at.eq(updated_at)))
    .execute(connection)?;
    if updated == 1 {
        return Ok(());
    }

    let actual = tasks::table
        .filter(tasks::id.eq(task_id.into_inner()))
        .select(tasks::status)
        .first::<String>(connection)
        .optional()?;
    match actual {
        Some(actual) => Err(TaskRepositoryError::StaleStatus {
            task_id,
            expected: expected_from,
            actual: TaskStatus::try_from(actual.as_str())
                .map_err(TaskRepositoryError::persistence)?,
        }),
        None => Err(TaskRepositoryError::NotFound(task_id)),
    }
}

fn to_new_task_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        schedule_id: task.schedule_id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        assigned_to: task.assigned_to().into_inner(),
        status: task.status().as_str().to_owned(),
        due_date: task.due_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_new_log_row(log: &TaskLog) -> NewTaskLogRow {
    NewTaskLogRow {
        id: log.id().into_inner(),
        task_id: log.task_id().into_inner(),
        action: log.action().as_str().to_owned(),
        from_status: log.from_status().map(|status| status.as_str().to_owned()),
        to_status: log.to_status().map(|status| status.as_str().to_owned()),
        note: log.note().map(str::to_owned),
        actor: log.actor().into_inner(),
        timestamp: log.timestamp(),
    }
}

fn to_new_evidence_row(evidence: &Evidence) -> NewEvidenceRow {
    NewEvidenceRow {
        id: evidence.id().into_inner(),
        task_id: evidence.task_id().into_inner(),
        photo_url: evidence.photo_url().to_owned(),
        content_digest: evidence.content_digest().to_owned(),
        metadata: evidence.metadata().map(str::to_owned),
        created_at: evidence.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        schedule_id: ScheduleId::from_uuid(row.schedule_id),
        title: row.title,
        description: row.description,
        assigned_to: UserId::from_uuid(row.assigned_to),
        status: TaskStatus::try_from(row.status.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        due_date: row.due_date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Task::from_persisted(data))
}

fn row_to_log(row: TaskLogRow) -> TaskRepositoryResult<TaskLog> {
    let from_status = row
        .from_status
        .as_deref()
        .map(TaskStatus::try_from)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;
    let to_status = row
        .to_status
        .as_deref()
        .map(TaskStatus::try_from)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;
    let data = PersistedTaskLogData {
        id: TaskLogId::from_uuid(row.id),
        task_id: TaskId::from_uuid(row.task_id),
        action: LogAction::try_from(row.action.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        from_status,
        to_status,
        note: row.note,
        actor: UserId::from_uuid(row.actor),
        timestamp: row.timestamp,
    };
    Ok(TaskLog::from_persisted(data))
}

fn row_to_evidence(row: EvidenceRow) -> TaskRepositoryResult<Evidence> {
    let data = PersistedEvidenceData {
        id: EvidenceId::from_uuid(row.id),
        task_id: TaskId::from_uuid(row.task_id),
        photo_url: row.photo_url,
        content_digest: row.content_digest,
        metadata: row.metadata,
        created_at: row.created_at,
    };
    Ok(Evidence::from_persisted(data))
}
