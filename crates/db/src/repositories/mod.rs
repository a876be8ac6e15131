//! Repository layer: one zero-sized struct per table with async query
//! functions.

pub mod advertisement_repo;

pub use advertisement_repo::AdvertisementRepo;
