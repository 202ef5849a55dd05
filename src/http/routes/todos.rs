use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{routing::{get, put}, Json, Router};

use crate::application::todo_service::TodoService;
use crate::domain::todo::{NewTodo, Todo, TodoChanges, TodoId};
use crate::http::{error::ApiError, extract::JsonBody};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/api/todos/", put(missing_id).delete(missing_id))
        .route("/api/todos/:id", put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, JsonBody(payload): JsonBody<NewTodo>) -> Result<StatusCode, ApiError> {
    state.service.create(payload).await?;
    Ok(StatusCode::CREATED)
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, JsonBody(payload): JsonBody<TodoChanges>) -> Result<StatusCode, ApiError> {
    let id = TodoId::from_path(id).ok_or(ApiError::MissingId)?;
    state.service.update(&id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = TodoId::from_path(id).ok_or(ApiError::MissingId)?;
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn missing_id() -> ApiError { ApiError::MissingId }
