//! Scaffold catalogue stores.

mod memory;

pub use memory::InMemoryCatalogStore;
