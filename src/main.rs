use std::net::SocketAddr;

use anyhow::Context;
use simple_todo::build_app;
use simple_todo::config::{Config, DatabaseConfig};
use simple_todo::domain::repository::TodoRepository;
use simple_todo::infrastructure::{mysql_repo::MySqlTodoRepository, sqlite_repo::SqliteTodoRepository};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");
    let addr = config.listen_addr();

    match &config.database {
        DatabaseConfig::Url(url) if config.database.is_sqlite() => {
            serve(SqliteTodoRepository::connect(url).await?, addr).await
        }
        DatabaseConfig::Url(url) => serve(MySqlTodoRepository::connect(url).await?, addr).await,
        mysql @ DatabaseConfig::MySql { .. } => {
            let options = mysql.mysql_options().context("building mysql connection options")?;
            serve(MySqlTodoRepository::connect_with(options).await?, addr).await
        }
    }
}

async fn serve<R: TodoRepository + Clone>(repo: R, addr: SocketAddr) -> anyhow::Result<()> {
    repo.init().await?;
    let router = build_app(repo);

    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
