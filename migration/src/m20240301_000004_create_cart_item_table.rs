use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_user_table::User, m20240301_000002_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CartItem::Id))
                    .col(uuid(CartItem::UserId))
                    .col(uuid(CartItem::ProductId))
                    .col(string(CartItem::Name))
                    .col(big_integer(CartItem::Price))
                    .col(integer_null(CartItem::Rating))
                    .col(string_null(CartItem::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_user_id")
                            .from(CartItem::Table, CartItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_product_id")
                            .from(CartItem::Table, CartItem::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_item_user_id")
                    .table(CartItem::Table)
                    .col(CartItem::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartItem {
    Table,
    Id,
    UserId,
    ProductId,
    Name,
    Price,
    Rating,
    Image,
}
