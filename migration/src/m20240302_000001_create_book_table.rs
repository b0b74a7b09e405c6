use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string(Book::Title))
                    .col(string(Book::Author))
                    .col(text(Book::Description))
                    .col(big_integer(Book::Cost))
                    .col(timestamp_with_time_zone(Book::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Book::UpdatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone_null(Book::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_deleted_at")
                    .table(Book::Table)
                    .col(Book::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    Title,
    Author,
    Description,
    Cost,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
