mod repository;
mod schema;

#[cfg(test)]
pub mod fixtures;

pub use repository::FeatureStore;
