pub mod document;
pub mod location;
pub mod picked;

pub use document::ImportedDocument;
pub use location::{FolderHandle, StorageLocation};
pub use picked::{PickError, PickedDocument};
