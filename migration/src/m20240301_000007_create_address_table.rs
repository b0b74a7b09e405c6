use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_uuid(Address::Id))
                    .col(uuid(Address::UserId))
                    .col(integer(Address::Slot))
                    .col(string(Address::HouseName))
                    .col(string(Address::StreetName))
                    .col(string(Address::CityName))
                    .col(string(Address::PinCode))
                    .col(timestamp_with_time_zone(Address::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_user_id")
                            .from(Address::Table, Address::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_address_user_id_slot")
                    .table(Address::Table)
                    .col(Address::UserId)
                    .col(Address::Slot)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    UserId,
    Slot,
    HouseName,
    StreetName,
    CityName,
    PinCode,
    CreatedAt,
}
