use sea_orm_migration::prelude::*;

use crate::m20260301_000001_create_table_projects::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tags::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Tags::Color).string_len(32))
                    .to_owned(),
            )
            .await?;

        // Join table; a tag appears at most once per project.
        manager
            .create_table(
                Table::create()
                    .table(ProjectTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectTags::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectTags::TagId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_project_tags")
                            .col(ProjectTags::ProjectId)
                            .col(ProjectTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tags_project_id")
                            .from(ProjectTags::Table, ProjectTags::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tags_tag_id")
                            .from(ProjectTags::Table, ProjectTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTags::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
    Color,
}

#[derive(DeriveIden)]
enum ProjectTags {
    Table,
    ProjectId,
    TagId,
}
