use crate::{DbError, Result as DbErrorResult};

use usync_core::{ErrorLocation, NewUser, UserRecord};

use std::panic::Location;

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

const USER_COLUMNS: &str = "id, name, email, remote_id, created_at";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    remote_id: Option<i64>,
    created_at: i64,
}

impl From<UserRow> for UserRecord {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            remote_id: r.remote_id,
            created_at: r.created_at,
        }
    }
}

/// Local record store for users.
///
/// Every method is a single SQL statement, so each one is atomic on its own.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new row. Fails with `DuplicateEmail` if the email is taken.
    pub async fn insert(
        &self,
        new_user: &NewUser,
        remote_id: Option<i64>,
    ) -> DbErrorResult<UserRecord> {
        let created_at = Utc::now().timestamp();

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
              INSERT INTO users (name, email, remote_id, created_at)
              VALUES (?, ?, ?, ?)
              RETURNING {USER_COLUMNS}
              "#
        ))
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(remote_id)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_unique_violation(e, &new_user.email))?;

        Ok(row.into())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    /// Newest row carrying `remote_id`; the directory may reuse ids.
    pub async fn find_by_remote_id(&self, remote_id: i64) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE remote_id = ? ORDER BY id DESC LIMIT 1"
        ))
        .bind(remote_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    /// Record the directory's id for a row once the directory has confirmed it.
    pub async fn attach_remote_id(&self, id: i64, remote_id: i64) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE users SET remote_id = ? WHERE id = ?")
            .bind(remote_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                message: format!("no user with id {}", id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub async fn delete_by_id(&self, id: i64) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                message: format!("no user with id {}", id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Look up and remove the newest row carrying `remote_id` in one statement.
    pub async fn delete_by_remote_id(&self, remote_id: i64) -> DbErrorResult<UserRecord> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
              DELETE FROM users
              WHERE id = (SELECT id FROM users WHERE remote_id = ? ORDER BY id DESC LIMIT 1)
              RETURNING {USER_COLUMNS}
              "#
        ))
        .bind(remote_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::from).ok_or_else(|| DbError::NotFound {
            message: format!("no user with remote id {}", remote_id),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// SQLite reports which column broke the constraint, e.g.
    /// "UNIQUE constraint failed: users.email".
    #[track_caller]
    fn map_unique_violation(err: sqlx::Error, email: &str) -> DbError {
        let is_email_violation = err
            .as_database_error()
            .filter(|db_err| db_err.is_unique_violation())
            .is_some_and(|db_err| db_err.message().contains("users.email"));

        if is_email_violation {
            DbError::DuplicateEmail {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            DbError::from(err)
        }
    }
}
