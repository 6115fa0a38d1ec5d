//! Manage-page form actions

/// Action named by the hidden `action` form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Update,
    Delete,
    /// Anything else; ignored by the manage handler
    Unrecognized(String),
}

impl ActionKind {
    /// Parse the raw field value. Matching is exact, as the form sends it.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "create" => Self::Create,
            "update" => Self::Update,
            "delete" => Self::Delete,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}
