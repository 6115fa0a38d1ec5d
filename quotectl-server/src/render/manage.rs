//! Manage page: flash, add/edit form, entries table

use chrono::Local;

use super::html::escape_html;
use super::layout::page;
use crate::views::{EntryForm, Flash, FlashKind, ManageView, QuoteRow};

const TITLE: &str = "Manage Jokes & Phrases ⚙️";

pub fn render_manage(view: &ManageView) -> String {
    let mut body = String::from(
        "    <div class=\"container\">\n\
         \x20       <header class=\"header\">\n\
         \x20           <h1>Manage Content ⚙️</h1>\n\
         \x20           <p class=\"subtitle\">Add, edit, and organize your jokes and phrases</p>\n\
         \x20       </header>\n",
    );

    if let Some(flash) = &view.flash {
        body.push_str(&flash_line(flash));
    }
    body.push_str(&form_section(&view.form));
    body.push_str(&table_section(&view.rows));
    body.push_str("    </div>\n");

    page(TITLE, &["/style.css", "/manage-style.css"], &body)
}

fn flash_line(flash: &Flash) -> String {
    let (class, icon) = match flash.kind {
        FlashKind::Success => ("success", "✅"),
        FlashKind::Error => ("error", "⚠️"),
    };
    format!(
        "        <div class=\"message {}\">\n\
         \x20           <span>{}</span>\n\
         \x20           <span>{}</span>\n\
         \x20       </div>\n",
        class,
        icon,
        escape_html(&flash.text)
    )
}

fn form_section(form: &EntryForm) -> String {
    let (heading, button, phrase, jokes) = match form {
        EntryForm::Create => ("➕ Add New Entry", "➕ Add Entry", "", ""),
        EntryForm::Edit { phrase, jokes, .. } => (
            "✏️ Edit Entry",
            "💾 Update Entry",
            phrase.as_str(),
            jokes.as_str(),
        ),
    };

    let id_field = match form {
        EntryForm::Edit { id, .. } => format!(
            "                <input type=\"hidden\" name=\"id\" value=\"{}\">\n",
            id
        ),
        EntryForm::Create => String::new(),
    };

    let cancel = if form.is_edit() {
        "                    <a href=\"/manage\" class=\"btn-secondary\">❌ Cancel Edit</a>\n"
    } else {
        ""
    };

    // No action attribute: the form posts back to the current URL,
    // so an update keeps `?edit=<id>` and shows the saved values.
    format!(
        "        <section class=\"form-section\">\n\
         \x20           <h2>{heading}</h2>\n\
         \x20           <form method=\"POST\">\n\
         \x20               <input type=\"hidden\" name=\"action\" value=\"{action}\">\n\
         {id_field}\
         \x20               <div class=\"form-group\">\n\
         \x20                   <label for=\"phrase\">💭 Phrase of Wisdom:</label>\n\
         \x20                   <textarea id=\"phrase\" name=\"phrase\" rows=\"3\" placeholder=\"Enter an inspiring phrase or quote...\">{phrase}</textarea>\n\
         \x20               </div>\n\
         \x20               <div class=\"form-group\">\n\
         \x20                   <label for=\"jokes\">😄 Daily Joke:</label>\n\
         \x20                   <textarea id=\"jokes\" name=\"jokes\" rows=\"3\" placeholder=\"Enter a funny joke to brighten someone&#039;s day...\">{jokes}</textarea>\n\
         \x20               </div>\n\
         \x20               <div class=\"form-actions\">\n\
         \x20                   <button type=\"submit\" class=\"btn-primary\">{button}</button>\n\
         {cancel}\
         \x20               </div>\n\
         \x20           </form>\n\
         \x20       </section>\n",
        heading = heading,
        action = form.action(),
        id_field = id_field,
        phrase = escape_html(phrase),
        jokes = escape_html(jokes),
        button = button,
        cancel = cancel,
    )
}

fn table_section(rows: &[QuoteRow]) -> String {
    let mut out = String::from(
        "        <section class=\"table-section\">\n\
         \x20           <a href=\"/\" class=\"back-link\">← Back to Daily View</a>\n\
         \x20           <h2>📋 All Entries</h2>\n",
    );

    if rows.is_empty() {
        out.push_str(
            "            <div class=\"empty-state\">\n\
             \x20               <div class=\"empty-state-icon\">📭</div>\n\
             \x20               <h3>No Entries Yet</h3>\n\
             \x20               <p>Start by adding your first joke or phrase above!</p>\n\
             \x20           </div>\n",
        );
    } else {
        out.push_str(
            "            <table class=\"data-table\">\n\
             \x20               <thead>\n\
             \x20                   <tr>\n\
             \x20                       <th>ID</th>\n\
             \x20                       <th>Phrase</th>\n\
             \x20                       <th>Joke</th>\n\
             \x20                       <th>Created At</th>\n\
             \x20                       <th>Actions</th>\n\
             \x20                   </tr>\n\
             \x20               </thead>\n\
             \x20               <tbody>\n",
        );
        for row in rows {
            out.push_str(&table_row(row));
        }
        out.push_str(
            "                </tbody>\n\
             \x20           </table>\n",
        );
    }

    out.push_str("        </section>\n");
    out
}

fn table_row(row: &QuoteRow) -> String {
    let phrase = preview_cell(row.phrase_preview.as_deref(), "No phrase");
    let jokes = preview_cell(row.jokes_preview.as_deref(), "No joke");
    let created = row.created_at.with_timezone(&Local).format("%b %-d, %Y");

    format!(
        "                    <tr>\n\
         \x20                       <td data-label=\"ID\" class=\"id-cell\">#{id}</td>\n\
         \x20                       <td data-label=\"Phrase\" class=\"preview-cell\">{phrase}</td>\n\
         \x20                       <td data-label=\"Joke\" class=\"preview-cell\">{jokes}</td>\n\
         \x20                       <td data-label=\"Created\" class=\"date-cell\">{created}</td>\n\
         \x20                       <td data-label=\"Actions\" class=\"actions-cell\">\n\
         \x20                           <a href=\"/manage?edit={id}\" class=\"btn-edit\">✏️ Edit</a>\n\
         \x20                           <form method=\"POST\" action=\"/manage\" class=\"delete-form\" onsubmit=\"return confirm('Are you sure you want to delete this entry?');\">\n\
         \x20                               <input type=\"hidden\" name=\"action\" value=\"delete\">\n\
         \x20                               <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         \x20                               <button type=\"submit\" class=\"btn-delete\">🗑️ Delete</button>\n\
         \x20                           </form>\n\
         \x20                       </td>\n\
         \x20                   </tr>\n",
        id = row.id,
        phrase = phrase,
        jokes = jokes,
        created = created,
    )
}

fn preview_cell(text: Option<&str>, placeholder: &str) -> String {
    match text {
        Some(t) => escape_html(t),
        None => format!("<em class=\"placeholder\">{}</em>", placeholder),
    }
}
