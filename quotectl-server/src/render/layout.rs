//! Shared page shell

use super::html::escape_html;

/// Wrap `body` in a complete HTML document.
pub fn page(title: &str, stylesheets: &[&str], body: &str) -> String {
    let links: String = stylesheets
        .iter()
        .map(|href| format!("    <link rel=\"stylesheet\" href=\"{}\">\n", escape_html(href)))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n    \
         <meta charset=\"UTF-8\">\n    \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    \
         <title>{title}</title>\n\
         {links}\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        links = links,
        body = body,
    )
}

/// Generic failure page; the real error stays in the logs.
pub fn error_page() -> String {
    page(
        "Something went wrong",
        &["/style.css"],
        "    <div class=\"container\">\n        \
         <h1>Something went wrong</h1>\n        \
         <p>We couldn't load this page. Please try again in a moment.</p>\n        \
         <p><a href=\"/\">← Back to Daily View</a></p>\n    \
         </div>\n",
    )
}
