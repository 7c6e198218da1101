use crate::io::IoError;

/// Ways a user action can fail.
///
/// Every variant is reported the same way: a notice for the user and the
/// cause in the log. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Folder access was not granted")]
    PermissionDenied,
    #[error("No destination folder selected")]
    NoDestinationSelected,
    #[error(transparent)]
    Io(#[from] IoError),
}
