pub mod application;
pub mod config;
pub mod domain;
pub mod http;
pub mod infrastructure;

use axum::Router;

use crate::application::todo_service::TodoServiceImpl;
use crate::domain::repository::TodoRepository;
use crate::http::{routes::todos, routing};

/// Full application router over an already initialised repository.
pub fn build_app<R: TodoRepository + Clone>(repo: R) -> Router {
    let service = TodoServiceImpl::new(repo);
    routing::app(todos::router(todos::AppState { service }))
}
