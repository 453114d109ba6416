pub mod model;
pub mod repository;

#[cfg(feature = "mock")]
pub mod mock;
