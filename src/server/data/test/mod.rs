use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod book;
mod checkout;
mod order;
