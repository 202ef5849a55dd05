use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlRow}, MySql, Pool, Row};

use crate::domain::{
    repository::TodoRepository,
    todo::{NewTodo, Todo, TodoChanges, TodoId},
};

#[derive(Clone)]
pub struct MySqlTodoRepository {
    pool: Pool<MySql>,
}

impl MySqlTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("connecting to mysql")?;
        Ok(Self { pool })
    }

    pub async fn connect_with(options: MySqlConnectOptions) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("connecting to mysql")?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoRepository for MySqlTodoRepository {
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
        sqlx::query("INSERT INTO todos (id, description, created_at, completed) VALUES (?, ?, ?, ?)")
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
        let result = sqlx::query("UPDATE todos SET description = ?, completed = ? WHERE id = ?")
            .bind(&changes.description)
            .bind(changes.completed)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .with_context(|| format!("updating todo {id}"))?;
        tracing::trace!(%id, rows = result.rows_affected(), "update executed");
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .with_context(|| format!("deleting todo {id}"))?;
        tracing::trace!(%id, rows = result.rows_affected(), "delete executed");
        Ok(())
    }
}

fn row_to_todo(row: &MySqlRow) -> Result<Todo, sqlx::Error> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Todo {
        id: TodoId(row.try_get("id")?),
        description: row.try_get("description")?,
        created_at,
        completed: row.try_get("completed")?,
    })
}
