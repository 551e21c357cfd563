use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resources::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Resources::Title).text().not_null())
                    .col(ColumnDef::new(Resources::Description).text())
                    .col(ColumnDef::new(Resources::FileUrl).text().not_null())
                    .col(ColumnDef::new(Resources::FileName).text().not_null())
                    .col(ColumnDef::new(Resources::FileSize).big_integer())
                    .col(ColumnDef::new(Resources::FileType).text())
                    .col(
                        ColumnDef::new(Resources::Category)
                            .text()
                            .not_null()
                            .check(Expr::cust(
                                "category IN ('study_material', 'project')",
                            )),
                    )
                    .col(
                        ColumnDef::new(Resources::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Resources::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Resources::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_resources_category_display_order
                ON resources (category, display_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_resources_category_display_order;")
            .await?;

        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resources {
    Table,
    Id,
    Title,
    Description,
    FileUrl,
    FileName,
    FileSize,
    FileType,
    Category,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
