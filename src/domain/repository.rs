use async_trait::async_trait;
use super::todo::{NewTodo, Todo, TodoChanges, TodoId};

/// Store accessor for the `todos` table. Every method issues a single statement.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn init(&self) -> anyhow::Result<()>;
    async fn list(&self) -> anyhow::Result<Vec<Todo>>;
    async fn create(&self, input: NewTodo) -> anyhow::Result<()>;
    /// Succeeds whether or not a row matched `id`.
    async fn update(&self, id: &TodoId, changes: TodoChanges) -> anyhow::Result<()>;
    /// Succeeds whether or not a row matched `id`.
    async fn delete(&self, id: &TodoId) -> anyhow::Result<()>;
}
