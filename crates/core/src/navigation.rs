use std::fmt;

/// Creation endpoint the draft is posted to.
pub const CREATE_APP_ENDPOINT: &str = "/api/admin/federated-saml";

/// Listing screen the back link points at.
pub const APPS_INDEX_PATH: &str = "/admin/federated-saml";

/// Edit screen address for a created app.
#[must_use]
pub fn edit_app_path(id: &str) -> String {
    format!("{APPS_INDEX_PATH}/{id}/edit")
}

/// A navigation request handed to the host router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Replace the current history entry, so back skips this screen
    Replace(String),
    /// Push a new history entry
    Push(String),
}

impl NavigationCommand {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Replace(path) | Self::Push(path) => path,
        }
    }

    #[must_use]
    pub fn is_replace(&self) -> bool {
        matches!(self, Self::Replace(_))
    }
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace(path) => write!(f, "replace {path}"),
            Self::Push(path) => write!(f, "push {path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_app_path() {
        assert_eq!(edit_app_path("42"), "/admin/federated-saml/42/edit");
        assert_eq!(
            NavigationCommand::Replace(edit_app_path("abc123")).path(),
            "/admin/federated-saml/abc123/edit"
        );
    }
}
