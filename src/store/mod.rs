//! Contact persistence.
//!
//! [`ContactStore`] is the storage contract; [`MemoryContactStore`] keeps
//! records in process memory and [`JsonFileContactStore`] persists them to
//! a JSON document on disk.

mod collection;
mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileContactStore;
pub use memory::MemoryContactStore;
pub use traits::ContactStore;
