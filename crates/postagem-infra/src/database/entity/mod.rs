//! SeaORM entities mirroring the relational schema.

pub mod category;
pub mod genre;
pub mod post;
pub mod user;
