use sea_orm::{DatabaseConnection, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::{address::AddressRepository, user::UserRepository},
    error::AppError,
    model::address::{Address, AddressParams, AddressSlot, MAX_ADDRESSES},
};

pub struct AddressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an address in the first free slot.
    ///
    /// # Returns
    /// - `Ok(Address)` - The stored address
    /// - `Err(AppError::BadRequest)` - Unknown user, or both slots taken ("Not allowed"),
    ///   including a slot claimed by a concurrent add
    pub async fn add(&self, user_id: Uuid, params: AddressParams) -> Result<Address, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid userID".to_string()))?;

        let repo = AddressRepository::new(self.db);
        let taken: Vec<i32> = repo
            .get_by_user(user_id)
            .await?
            .into_iter()
            .map(|a| a.slot)
            .collect();
        if taken.len() as u64 >= MAX_ADDRESSES {
            return Err(not_allowed());
        }

        let slot = [AddressSlot::Home, AddressSlot::Work]
            .into_iter()
            .map(AddressSlot::index)
            .find(|slot| !taken.contains(slot))
            .ok_or_else(not_allowed)?;

        // The (user_id, slot) unique index rejects a slot taken since it was read.
        repo.create(user_id, slot, params)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => not_allowed(),
                _ => err.into(),
            })
    }

    /// Overwrites the address in `slot`.
    ///
    /// # Returns
    /// - `Ok(Address)` - The updated address
    /// - `Err(AppError::NotFound)` - The slot is empty
    pub async fn edit(
        &self,
        user_id: Uuid,
        slot: AddressSlot,
        params: AddressParams,
    ) -> Result<Address, AppError> {
        AddressRepository::new(self.db)
            .update_slot(user_id, slot, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No {} address to edit", slot.name())))
    }

    pub async fn delete_all(&self, user_id: Uuid) -> Result<u64, AppError> {
        Ok(AddressRepository::new(self.db).delete_all(user_id).await?)
    }
}

fn not_allowed() -> AppError {
    AppError::BadRequest("Not allowed".to_string())
}
