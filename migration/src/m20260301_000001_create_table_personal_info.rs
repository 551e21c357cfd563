use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton row: the application reads it as "first or none".
        manager
            .create_table(
                Table::create()
                    .table(PersonalInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PersonalInfo::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PersonalInfo::Name).text().not_null())
                    .col(
                        ColumnDef::new(PersonalInfo::Roles)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(PersonalInfo::Location).text())
                    .col(ColumnDef::new(PersonalInfo::Bio).text())
                    .col(ColumnDef::new(PersonalInfo::Email).text())
                    .col(ColumnDef::new(PersonalInfo::Phone).text())
                    .col(ColumnDef::new(PersonalInfo::Address).text())
                    .col(ColumnDef::new(PersonalInfo::CvUrl).text())
                    .col(ColumnDef::new(PersonalInfo::ProfileImage).text())
                    .col(
                        ColumnDef::new(PersonalInfo::StatsProjects)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::StatsExperience)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::StatsClients)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::StatsAwards)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one row.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS personal_info_singleton
                ON personal_info ((true));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS personal_info_singleton;")
            .await?;

        manager
            .drop_table(Table::drop().table(PersonalInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PersonalInfo {
    Table,
    Id,
    Name,
    Roles,
    Location,
    Bio,
    Email,
    Phone,
    Address,
    CvUrl,
    ProfileImage,
    StatsProjects,
    StatsExperience,
    StatsClients,
    StatsAwards,
    CreatedAt,
    UpdatedAt,
}
