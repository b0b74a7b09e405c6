//! Address factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates an address for `user_id` in `slot` with generated field values.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the address
/// - `slot` - 0 for home, 1 for work
pub async fn create_address(
    db: &DatabaseConnection,
    user_id: Uuid,
    slot: i32,
) -> Result<entity::address::Model, DbErr> {
    let id = next_id();
    entity::address::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        slot: ActiveValue::Set(slot),
        house_name: ActiveValue::Set(format!("House {}", id)),
        street_name: ActiveValue::Set(format!("{} Main Street", id)),
        city_name: ActiveValue::Set("Springfield".to_string()),
        pin_code: ActiveValue::Set(format!("{:06}", id)),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
