use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // resume_basic_info (single row)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ResumeBasicInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResumeBasicInfo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResumeBasicInfo::FullName)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResumeBasicInfo::Email).string_len(200))
                    .col(ColumnDef::new(ResumeBasicInfo::Phone).string_len(50))
                    .col(ColumnDef::new(ResumeBasicInfo::LinkedinUrl).text())
                    .col(ColumnDef::new(ResumeBasicInfo::GithubUrl).text())
                    .col(ColumnDef::new(ResumeBasicInfo::WebsiteUrl).text())
                    .col(ColumnDef::new(ResumeBasicInfo::Location).string_len(200))
                    .col(ColumnDef::new(ResumeBasicInfo::Summary).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // resume_sections
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ResumeSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResumeSections::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResumeSections::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResumeSections::SectionType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResumeSections::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ResumeSections::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // resume_entries
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ResumeEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResumeEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResumeEntries::SectionId).integer().not_null())
                    .col(ColumnDef::new(ResumeEntries::Title).string_len(200).not_null())
                    .col(ColumnDef::new(ResumeEntries::Subtitle).string_len(200))
                    .col(ColumnDef::new(ResumeEntries::Location).string_len(200))
                    .col(ColumnDef::new(ResumeEntries::StartDate).date())
                    .col(ColumnDef::new(ResumeEntries::EndDate).date())
                    .col(
                        ColumnDef::new(ResumeEntries::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ResumeEntries::Description).text())
                    .col(
                        ColumnDef::new(ResumeEntries::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resume_entries_section_id")
                            .from(ResumeEntries::Table, ResumeEntries::SectionId)
                            .to(ResumeSections::Table, ResumeSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // resume_entry_bullets
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ResumeEntryBullets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResumeEntryBullets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResumeEntryBullets::EntryId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResumeEntryBullets::Content).text().not_null())
                    .col(
                        ColumnDef::new(ResumeEntryBullets::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resume_entry_bullets_entry_id")
                            .from(ResumeEntryBullets::Table, ResumeEntryBullets::EntryId)
                            .to(ResumeEntries::Table, ResumeEntries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One position per slot at every level; reorders park rows on
        // negative values first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_resume_sections_order
                ON resume_sections (display_order);
                CREATE UNIQUE INDEX IF NOT EXISTS idx_resume_entries_order
                ON resume_entries (section_id, display_order);
                CREATE UNIQUE INDEX IF NOT EXISTS idx_resume_entry_bullets_order
                ON resume_entry_bullets (entry_id, display_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResumeEntryBullets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResumeEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResumeSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResumeBasicInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ResumeBasicInfo {
    Table,
    Id,
    FullName,
    Email,
    Phone,
    LinkedinUrl,
    GithubUrl,
    WebsiteUrl,
    Location,
    Summary,
}

#[derive(DeriveIden)]
enum ResumeSections {
    Table,
    Id,
    Title,
    SectionType,
    DisplayOrder,
    IsVisible,
}

#[derive(DeriveIden)]
enum ResumeEntries {
    Table,
    Id,
    SectionId,
    Title,
    Subtitle,
    Location,
    StartDate,
    EndDate,
    IsCurrent,
    Description,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum ResumeEntryBullets {
    Table,
    Id,
    EntryId,
    Content,
    DisplayOrder,
}
