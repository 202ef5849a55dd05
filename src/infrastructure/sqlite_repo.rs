use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};

use crate::domain::{
    repository::TodoRepository,
    todo::{NewTodo, Todo, TodoChanges, TodoId},
};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Pool<Sqlite>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("parsing sqlite url {database_url}"))?
            .create_if_missing(true);
        // Every connection to an in-memory database is a separate database.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await
        } else {
            SqlitePoolOptions::new().max_connections(5).connect_with(options).await
        }
        .context("opening sqlite database")?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await.context("running migrations")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query("SELECT id, description, created_at, completed FROM todos")
            .fetch_all(&self.pool)
            .await
            .context("selecting todos")?;
        rows.iter()
            .map(row_to_todo)
            .collect::<Result<Vec<_>, _>>()
            .context("mapping todo rows")
    }

    async fn create(&self, input: NewTodo) -> Result<()> {
        sqlx::query("INSERT INTO todos (id, description, created_at, completed) VALUES (?1, ?2, ?3, ?4)")
            .bind(input.id.as_str())
            .bind(&input.description)
            .bind(Utc::now())
            .bind(input.completed)
            .execute(&self.pool)
            .await
            .with_context(|| format!("inserting todo {}", input.id))?;
        Ok(())
    }

    async fn update(&self, id: &TodoId, changes: TodoChanges) -> Result<()> {
        let result = sqlx::query("UPDATE todos SET description = ?2, completed = ?3 WHERE id = ?1")
            .bind(id.as_str())
            .bind(&changes.description)
            .bind(changes.completed)
            .execute(&self.pool)
            .await
            .with_context(|| format!("updating todo {id}"))?;
        tracing::trace!(%id, rows = result.rows_affected(), "update executed");
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .with_context(|| format!("deleting todo {id}"))?;
        tracing::trace!(%id, rows = result.rows_affected(), "delete executed");
        Ok(())
    }
}

fn row_to_todo(row: &SqliteRow) -> Result<Todo, sqlx::Error> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Todo {
        id: TodoId(row.try_get("id")?),
        description: row.try_get("description")?,
        created_at,
        completed: row.try_get("completed")?,
    })
}
