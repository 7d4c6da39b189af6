//! SeaORM adapters; every function returns `DbErr`.

pub mod artists_sea;
pub mod shows_sea;
pub mod venues_sea;
