mod reorder_repository_postgres;

pub use reorder_repository_postgres::ReorderRepositoryPostgres;
