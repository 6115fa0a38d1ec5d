//! Form input for creating and updating entries
//!
//! Raw strings from the form are trimmed here; a blank field becomes
//! `None` and is stored as SQL NULL.

use std::fmt;

use super::ValidationError;

/// Trimmed phrase/joke pair ready to be written to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryText {
    phrase: Option<String>,
    jokes: Option<String>,
}

impl EntryText {
    /// Trim both inputs, mapping blank or absent values to `None`.
    pub fn from_input(phrase: Option<&str>, jokes: Option<&str>) -> Self {
        Self {
            phrase: clean(phrase),
            jokes: clean(jokes),
        }
    }

    /// Input for a new entry: at least one field must have content.
    ///
    /// # Example
    /// ```
    /// use quotectl_server::models::EntryText;
    ///
    /// assert!(EntryText::for_create(Some("Be bold."), Some("")).is_ok());
    /// assert!(EntryText::for_create(Some("  "), None).is_err());
    /// ```
    pub fn for_create(phrase: Option<&str>, jokes: Option<&str>) -> Result<Self, ValidationError> {
        let text = Self::from_input(phrase, jokes);
        if text.is_empty() {
            return Err(ValidationError::EmptyEntry);
        }
        Ok(text)
    }

    /// Input for an update: both columns are overwritten, blanks allowed.
    pub fn for_update(phrase: Option<&str>, jokes: Option<&str>) -> Self {
        Self::from_input(phrase, jokes)
    }

    pub fn phrase(&self) -> Option<&str> {
        self.phrase.as_deref()
    }

    pub fn jokes(&self) -> Option<&str> {
        self.jokes.as_deref()
    }

    /// True when neither field carries content
    pub fn is_empty(&self) -> bool {
        self.phrase.is_none() && self.jokes.is_none()
    }
}

fn clean(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Store-assigned identifier of an entry (positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId {
                value: id.to_string(),
            });
        }
        Ok(Self(id))
    }

    /// Parse an id from a form field or query parameter.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let id = trimmed
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId {
                value: trimmed.to_owned(),
            })?;
        Self::new(id)
    }

    /// Parse an optional field; absent or blank is `Missing`.
    pub fn from_field(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            Some(value) if !value.trim().is_empty() => Self::parse(value),
            _ => Err(ValidationError::Missing { field: "id" }),
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
