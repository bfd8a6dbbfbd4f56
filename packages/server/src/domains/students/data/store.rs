use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::domains::students::models::Student;

/// Persistence interface for student records.
///
/// `save` is insert-or-update keyed on identifier presence: a record without
/// an id is inserted and returned with its assigned id, a record carrying an
/// id is written under that id. A lookup miss is `Ok(None)` rather than an
/// error, and deleting an id that does not exist succeeds silently.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Student>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>>;

    async fn save(&self, student: &Student) -> Result<Student>;

    async fn delete_by_id(&self, id: i32) -> Result<()>;
}

/// Postgres-backed [`StudentStore`].
#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn find_all(&self) -> Result<Vec<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn save(&self, student: &Student) -> Result<Student> {
        match student.id {
            Some(id) => sqlx::query_as::<_, Student>(
                r#"
                INSERT INTO students (id, name, email, age)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE
                SET name = EXCLUDED.name, email = EXCLUDED.email, age = EXCLUDED.age
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(student.name.as_deref())
            .bind(student.email.as_deref())
            .bind(student.age)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into),
            None => sqlx::query_as::<_, Student>(
                r#"
                INSERT INTO students (name, email, age)
                VALUES ($1, $2, $3)
                RETURNING *
                "#,
            )
            .bind(student.name.as_deref())
            .bind(student.email.as_deref())
            .bind(student.age)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
