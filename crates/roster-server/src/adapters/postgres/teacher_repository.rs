//! PostgreSQL implementation of TeacherRepository

use async_trait::async_trait;
use sqlx::PgPool;

use roster::{StorageError, Teacher, TeacherRepository};

/// PostgreSQL implementation of TeacherRepository
pub struct PgTeacherRepository {
    pool: PgPool,
}

impl PgTeacherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct TeacherRow {
    id: i64,
    email: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TeacherRepository for PgTeacherRepository {
    async fn find_id_by_email(&self, email: &str) -> Result<Option<i64>, StorageError> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM teachers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::query)
    }

    async fn create(&self, email: &str) -> Result<Teacher, StorageError> {
        // The no-op update makes RETURNING yield the existing row on conflict
        let row = sqlx::query_as::<_, TeacherRow>(
            r#"
            INSERT INTO teachers (email)
            VALUES ($1)
            ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
            RETURNING id, email, created_at
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::query)?;

        Ok(row.into())
    }
}
