use super::ActionError;

/// The user actions that report back through a [`Notice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Import,
    SelectDestination,
    Export,
    Preview,
}

impl Action {
    fn success_message(self) -> &'static str {
        match self {
            Action::Import => "PDF uploaded successfully!",
            Action::SelectDestination => "Folder selected for saving files.",
            Action::Export => "PDF saved successfully!",
            Action::Preview => "Preview loaded.",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Action::Import => "Failed to upload PDF",
            Action::SelectDestination => "Failed to select folder",
            Action::Export => "Failed to save PDF.",
            Action::Preview => "Failed to load PDF for preview.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    PermissionDenied,
}

/// A blocking message shown to the user after an action
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(action: Action) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            message: action.success_message().to_string(),
        }
    }

    pub fn failure(action: Action, error: &ActionError) -> Self {
        match error {
            ActionError::PermissionDenied => Self {
                kind: NoticeKind::PermissionDenied,
                title: "Permission Denied".to_string(),
                message: "You need to allow access to save files.".to_string(),
            },
            ActionError::NoDestinationSelected => Self {
                kind: NoticeKind::Error,
                title: "Error".to_string(),
                message: "No folder selected. Please select a folder first.".to_string(),
            },
            ActionError::Io(_) => Self {
                kind: NoticeKind::Error,
                title: "Error".to_string(),
                message: action.failure_message().to_string(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind != NoticeKind::Success
    }
}
