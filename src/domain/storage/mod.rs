//! Storage domain - Local key-value persistence abstraction

mod repository;

pub use repository::{LocalStorage, LocalStorageExt};

#[cfg(test)]
pub use repository::mock::{MockLocalStorage, StorageOp};
