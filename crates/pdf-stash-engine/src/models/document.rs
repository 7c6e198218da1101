use super::StorageLocation;
use uuid::Uuid;

/// A document copied into app storage during this session
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedDocument {
    id: Uuid,
    display_name: String,
    location: StorageLocation,
}

impl ImportedDocument {
    pub fn new(display_name: impl Into<String>, location: StorageLocation) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            location,
        }
    }

    /// Stable key for list rendering
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name the user picked, which may differ from the stored file name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn location(&self) -> &StorageLocation {
        &self.location
    }
}
