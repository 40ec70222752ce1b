pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_projects;
mod m20260301_000002_create_table_tags;
mod m20260301_000003_create_table_tech_stack;
mod m20260301_000004_create_resume_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_projects::Migration),
            Box::new(m20260301_000002_create_table_tags::Migration),
            Box::new(m20260301_000003_create_table_tech_stack::Migration),
            Box::new(m20260301_000004_create_resume_tables::Migration),
        ]
    }
}
