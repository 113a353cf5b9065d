//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod advert;
pub mod user;

pub use advert::{ActiveModel as AdvertActiveModel, Entity as AdvertEntity, Model as AdvertModel};
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
