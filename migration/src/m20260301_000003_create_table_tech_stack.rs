use sea_orm_migration::prelude::*;

use crate::m20260301_000001_create_table_projects::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // tech_stack (master list)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TechStack::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechStack::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TechStack::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TechStack::Color).string_len(32))
                    .col(ColumnDef::new(TechStack::ImageUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // project_tech_stack (ordered links)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectTechStack::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectTechStack::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechStack::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechStack::TechStackId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechStack::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tech_stack_project_id")
                            .from(ProjectTechStack::Table, ProjectTechStack::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tech_stack_tech_stack_id")
                            .from(ProjectTechStack::Table, ProjectTechStack::TechStackId)
                            .to(TechStack::Table, TechStack::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_project_tech_stack_unique
                ON project_tech_stack (project_id, tech_stack_id);
                CREATE UNIQUE INDEX IF NOT EXISTS idx_project_tech_stack_order
                ON project_tech_stack (project_id, display_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTechStack::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TechStack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TechStack {
    Table,
    Id,
    Name,
    Color,
    ImageUrl,
}

#[derive(DeriveIden)]
enum ProjectTechStack {
    Table,
    Id,
    ProjectId,
    TechStackId,
    DisplayOrder,
}
