use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::address::{Address, AddressParams, AddressSlot};

pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's addresses ordered by slot.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Address>, DbErr> {
        let entities = entity::prelude::Address::find()
            .filter(entity::address::Column::UserId.eq(user_id))
            .order_by_asc(entity::address::Column::Slot)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Address::from_entity).collect())
    }

    /// Inserts an address into `slot`. The slot must be free.
    pub async fn create(
        &self,
        user_id: Uuid,
        slot: i32,
        params: AddressParams,
    ) -> Result<Address, DbErr> {
        let entity = entity::address::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            slot: ActiveValue::Set(slot),
            house_name: ActiveValue::Set(params.house_name),
            street_name: ActiveValue::Set(params.street_name),
            city_name: ActiveValue::Set(params.city_name),
            pin_code: ActiveValue::Set(params.pin_code),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Address::from_entity(entity))
    }

    /// Overwrites the address fields stored in `slot`.
    ///
    /// # Returns
    /// - `Ok(Some(Address))` - Updated address
    /// - `Ok(None)` - The user has no address in this slot
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_slot(
        &self,
        user_id: Uuid,
        slot: AddressSlot,
        params: AddressParams,
    ) -> Result<Option<Address>, DbErr> {
        let Some(existing) = entity::prelude::Address::find()
            .filter(entity::address::Column::UserId.eq(user_id))
            .filter(entity::address::Column::Slot.eq(slot.index()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.house_name = ActiveValue::Set(params.house_name);
        active.street_name = ActiveValue::Set(params.street_name);
        active.city_name = ActiveValue::Set(params.city_name);
        active.pin_code = ActiveValue::Set(params.pin_code);

        let updated = active.update(self.db).await?;

        Ok(Some(Address::from_entity(updated)))
    }

    /// Removes every address of the user and returns how many were removed.
    pub async fn delete_all(&self, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Address::delete_many()
            .filter(entity::address::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
