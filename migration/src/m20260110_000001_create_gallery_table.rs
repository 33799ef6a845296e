use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Galleries::Table)
                    .if_not_exists()
                    .col(pk_auto(Galleries::Id))
                    .col(string(Galleries::Title))
                    .col(string_uniq(Galleries::Slug))
                    .col(string_null(Galleries::Cover))
                    .col(json(Galleries::Photos))
                    .col(timestamp_with_time_zone(Galleries::CreatedAt))
                    .col(timestamp_with_time_zone(Galleries::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Galleries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Galleries {
    Table,
    Id,
    Title,
    Slug,
    Cover,
    Photos,
    CreatedAt,
    UpdatedAt,
}
