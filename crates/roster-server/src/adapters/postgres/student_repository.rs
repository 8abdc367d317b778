//! PostgreSQL implementation of StudentRepository

use async_trait::async_trait;
use sqlx::PgPool;

use roster::{RosterEntry, StorageError, StudentRepository, StudentStatus};

/// PostgreSQL implementation of StudentRepository
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct RosterRow {
    email: String,
    status: String,
}

impl TryFrom<RosterRow> for RosterEntry {
    type Error = StorageError;

    fn try_from(row: RosterRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<StudentStatus>().map_err(StorageError::Decode)?;
        Ok(RosterEntry::new(row.email, status))
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn list_emails(&self) -> Result<Vec<String>, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT email FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::query)
    }

    async fn find_by_teachers(
        &self,
        teacher_emails: &[String],
    ) -> Result<Vec<RosterEntry>, StorageError> {
        // 'suspend' sorts after 'active', so MAX reports any suspension
        let rows = sqlx::query_as::<_, RosterRow>(
            r#"
            SELECT s.email, MAX(s.status) AS status
            FROM students s
            INNER JOIN teachers t ON s.teacher_id = t.id
            WHERE t.email = ANY($1)
            GROUP BY s.email
            HAVING COUNT(DISTINCT t.id) = $2
            ORDER BY MIN(s.id)
            "#,
        )
        .bind(teacher_emails)
        .bind(teacher_emails.len() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::query)?;

        rows.into_iter().map(RosterEntry::try_from).collect()
    }

    async fn insert_many(
        &self,
        student_emails: &[String],
        teacher_id: i64,
    ) -> Result<u64, StorageError> {
        // New registrations of an already suspended student stay suspended
        let result = sqlx::query(
            r#"
            INSERT INTO students (email, teacher_id, status)
            SELECT e.email, $2,
                   CASE WHEN EXISTS (
                       SELECT 1 FROM students s
                       WHERE s.email = e.email AND s.status = 'suspend'
                   ) THEN 'suspend' ELSE 'active' END
            FROM UNNEST($1::text[]) AS e(email)
            ON CONFLICT (email, teacher_id) DO NOTHING
            "#,
        )
        .bind(student_emails)
        .bind(teacher_id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::query)?;

        tracing::debug!(
            "Inserted {} student rows for teacher {}",
            result.rows_affected(),
            teacher_id
        );

        Ok(result.rows_affected())
    }

    async fn update_status(
        &self,
        email: &str,
        status: StudentStatus,
    ) -> Result<u64, StorageError> {
        let result = sqlx::query("UPDATE students SET status = $2 WHERE email = $1")
            .bind(email)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::query)?;

        Ok(result.rows_affected())
    }

    async fn filter_by_status(
        &self,
        student_emails: &[String],
        status: StudentStatus,
    ) -> Result<Vec<String>, StorageError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT email
            FROM students
            WHERE email = ANY($1)
            GROUP BY email
            HAVING bool_and(status = $2)
            ORDER BY MIN(id)
            "#,
        )
        .bind(student_emails)
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::query)
    }
}
