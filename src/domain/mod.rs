//! Domain layer - Core business records
//!
//! Plain data records for users and adverts, their JSON form,
//! and the typed field changes a partial update applies to them.
//! Nothing here knows about the database or HTTP.

pub mod advert;
pub mod user;

pub use advert::{Advert, AdvertChange};
pub use user::{User, UserChange};
