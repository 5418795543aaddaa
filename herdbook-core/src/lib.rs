//! Herdbook Core Library
//!
//! Shared types and logic for Herdbook applications: the animal-type
//! registry, the Beeste record catalog, and the state behind their screens.

pub mod catalog;
pub mod error;
pub mod models;
pub mod registry;
pub mod screens;
pub mod store;
pub mod text;

pub use catalog::{RecordCatalog, BEESTE_COLLECTION};
pub use error::{CatalogError, InputField, RegistryError, StoreError};
pub use models::{AnimalType, BeesRecord};
pub use registry::{TypeRegistry, ANIMAL_TYPE_COLLECTION, ANIMAL_TYPES_FIELD};
pub use screens::{BeesForm, BeesteScreen, LoadState, Overlay, TypeSelector};
pub use store::{DocumentSnapshot, DocumentStore, Fields, MemoryStore};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
