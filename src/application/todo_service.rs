use crate::domain::repository::TodoRepository;
use crate::domain::todo::{NewTodo, Todo, TodoChanges, TodoId};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Todo>>;
    async fn create(&self, input: NewTodo) -> Result<()>;
    async fn update(&self, id: &TodoId, changes: TodoChanges) -> Result<()>;
    async fn delete(&self, id: &TodoId) -> Result<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn list(&self) -> Result<Vec<Todo>> {
        let todos = self.repo.list().await?;
        tracing::debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    async fn create(&self, input: NewTodo) -> Result<()> {
        let id = input.id.clone();
        self.repo.create(input).await?;
        tracing::debug!(%id, "created todo");
        Ok(())
    }

    async fn update(&self, id: &TodoId, changes: TodoChanges) -> Result<()> {
        self.repo.update(id, changes).await?;
        tracing::debug!(%id, "updated todo");
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        self.repo.delete(id).await?;
        tracing::debug!(%id, "deleted todo");
        Ok(())
    }
}
