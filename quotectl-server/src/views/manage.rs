//! Manage page request handling
//!
//! One pass per request:
//! 1. POST only: apply the `action` field (create/update/delete)
//! 2. Any method: `edit=<id>` switches the form to edit mode
//! 3. Always: re-read every entry for the table
//!
//! The request is a plain value; no HTTP types reach this module.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::db::{DbError, QuoteStore};
use crate::models::{preview, ActionKind, EntryId, EntryText, Quote, PREVIEW_CHARS};

pub const MSG_ADDED: &str = "Entry added successfully!";
pub const MSG_UPDATED: &str = "Entry updated successfully!";
pub const MSG_DELETED: &str = "Entry deleted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

/// Everything the manage handler reads from a request
#[derive(Debug, Clone)]
pub struct ManageRequest {
    pub method: RequestMethod,
    /// Form body fields (POST only)
    pub form: HashMap<String, String>,
    /// Query string parameters
    pub query: HashMap<String, String>,
}

impl ManageRequest {
    pub fn get(query: HashMap<String, String>) -> Self {
        Self {
            method: RequestMethod::Get,
            form: HashMap::new(),
            query,
        }
    }

    pub fn post(form: HashMap<String, String>, query: HashMap<String, String>) -> Self {
        Self {
            method: RequestMethod::Post,
            form,
            query,
        }
    }

    pub fn form_field(&self, name: &str) -> Option<&str> {
        self.form.get(name).map(String::as_str)
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-line message shown above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

/// Add form, or edit form pre-filled with the untruncated entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryForm {
    Create,
    Edit {
        id: i64,
        phrase: String,
        jokes: String,
    },
}

impl EntryForm {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    /// Value of the hidden `action` field
    pub fn action(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit { .. } => "update",
        }
    }
}

impl From<&Quote> for EntryForm {
    fn from(quote: &Quote) -> Self {
        Self::Edit {
            id: quote.id,
            phrase: quote.phrase.clone().unwrap_or_default(),
            jokes: quote.jokes.clone().unwrap_or_default(),
        }
    }
}

/// Table row with truncated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRow {
    pub id: i64,
    pub phrase_preview: Option<String>,
    pub jokes_preview: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Quote> for QuoteRow {
    fn from(quote: &Quote) -> Self {
        Self {
            id: quote.id,
            phrase_preview: quote.phrase_text().map(|t| preview(t, PREVIEW_CHARS)),
            jokes_preview: quote.jokes_text().map(|t| preview(t, PREVIEW_CHARS)),
            created_at: quote.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ManageView {
    pub flash: Option<Flash>,
    pub form: EntryForm,
    pub rows: Vec<QuoteRow>,
}

/// Run one manage-page request against the store.
///
/// Validation problems and unknown ids become an error flash; only store
/// failures are returned as `Err`.
pub async fn handle(store: &dyn QuoteStore, request: &ManageRequest) -> Result<ManageView, DbError> {
    let mut flash = None;

    if request.method == RequestMethod::Post {
        if let Some(raw) = request.form_field("action") {
            flash = apply_action(store, ActionKind::parse(raw), request).await?;
        }
    }

    let mut form = EntryForm::Create;
    if let Some(raw) = request.query_param("edit") {
        match edit_target(store, raw).await? {
            Ok(quote) => form = EntryForm::from(&quote),
            Err(note) => {
                flash.get_or_insert(note);
            }
        }
    }

    let rows = store.list_all().await?.iter().map(QuoteRow::from).collect();

    Ok(ManageView { flash, form, rows })
}

async fn apply_action(
    store: &dyn QuoteStore,
    action: ActionKind,
    request: &ManageRequest,
) -> Result<Option<Flash>, DbError> {
    let phrase = request.form_field("phrase");
    let jokes = request.form_field("jokes");

    let flash = match action {
        ActionKind::Create => match EntryText::for_create(phrase, jokes) {
            Ok(text) => {
                let quote = store.insert(&text).await?;
                tracing::info!(id = quote.id, "entry created");
                Flash::success(MSG_ADDED)
            }
            Err(e) => Flash::error(e.to_string()),
        },
        ActionKind::Update => match EntryId::from_field(request.form_field("id")) {
            Ok(id) => {
                let text = EntryText::for_update(phrase, jokes);
                if store.update(id, &text).await? == 0 {
                    tracing::info!(%id, "update matched no entry");
                    not_found(id)
                } else {
                    tracing::info!(%id, "entry updated");
                    Flash::success(MSG_UPDATED)
                }
            }
            Err(e) => Flash::error(e.to_string()),
        },
        ActionKind::Delete => match EntryId::from_field(request.form_field("id")) {
            Ok(id) => {
                if store.delete(id).await? == 0 {
                    tracing::info!(%id, "delete matched no entry");
                    not_found(id)
                } else {
                    tracing::info!(%id, "entry deleted");
                    Flash::success(MSG_DELETED)
                }
            }
            Err(e) => Flash::error(e.to_string()),
        },
        ActionKind::Unrecognized(raw) => {
            tracing::debug!(action = %raw, "ignoring unrecognized action");
            return Ok(None);
        }
    };

    Ok(Some(flash))
}

/// Resolve `edit=<raw>`; the inner `Err` is the note shown when falling back to create mode.
async fn edit_target(store: &dyn QuoteStore, raw: &str) -> Result<Result<Quote, Flash>, DbError> {
    let id = match EntryId::parse(raw) {
        Ok(id) => id,
        Err(e) => return Ok(Err(Flash::error(e.to_string()))),
    };

    Ok(store.get(id).await?.ok_or_else(|| {
        Flash::error(format!(
            "Entry #{} not found. Showing the add form instead.",
            id
        ))
    }))
}

fn not_found(id: EntryId) -> Flash {
    Flash::error(format!("Entry #{} not found.", id))
}
