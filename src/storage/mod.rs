pub mod json_file;
pub mod records;
pub mod source;

pub use json_file::{JsonFileStore, StoreError};
pub use records::{Restaurant, Review};
pub use source::{DataSource, ReloadPolicy};
