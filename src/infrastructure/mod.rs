pub mod mysql_repo;
pub mod sqlite_repo;
