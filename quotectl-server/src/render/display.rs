//! Public display page

use chrono::Local;

use super::html::{escape_html, nl2br};
use super::layout::page;
use crate::models::Quote;
use crate::views::{DayView, DisplayContent, DisplayView, RandomView};

const TITLE: &str = "Daily Inspiration ✨";

pub fn render_display(view: &DisplayView) -> String {
    let total = match &view.content {
        DisplayContent::Random(random) => random.total,
        DisplayContent::Today(day) => day.total,
    };

    let main = match &view.content {
        DisplayContent::Random(random) => random_cards(random),
        DisplayContent::Today(day) => day_list(day),
    };

    let body = format!(
        "    <div class=\"main-container\">\n\
         {header}\
         {main}\
         {actions}\
         {fun_fact}\
         {footer}\
         \x20   </div>\n",
        header = header(total),
        main = main,
        actions = actions(),
        fun_fact = FUN_FACT,
        footer = footer(view),
    );

    page(TITLE, &["/style.css"], &body)
}

fn header(total: i64) -> String {
    let noun = if total == 1 { "entry" } else { "entries" };
    format!(
        "        <header class=\"hero-header\">\n\
         \x20           <div class=\"logo-container\">\n\
         \x20               <div class=\"logo-icon\">✨</div>\n\
         \x20               <h1 class=\"main-title\">Daily Inspiration</h1>\n\
         \x20           </div>\n\
         \x20           <p class=\"tagline\">Your daily dose of wisdom and laughter</p>\n\
         \x20           <div class=\"stats-badge\">\n\
         \x20               <span class=\"stats-icon\">📊</span>\n\
         \x20               <span class=\"stats-text\">{total} inspiring {noun}</span>\n\
         \x20           </div>\n\
         \x20       </header>\n",
    )
}

fn random_cards(random: &RandomView) -> String {
    format!(
        "        <main class=\"content-grid\">\n\
         \x20           <article class=\"card phrase-card\">\n\
         \x20               <div class=\"card-header\">\n\
         \x20                   <div class=\"card-icon\">💭</div>\n\
         \x20                   <h2 class=\"card-title\">Phrase of the Day</h2>\n\
         \x20               </div>\n\
         \x20               <div class=\"card-body\">\n\
         \x20                   <blockquote class=\"phrase-content\">\n\
         \x20                       <p>{phrase}</p>\n\
         \x20                   </blockquote>\n\
         \x20               </div>\n\
         \x20           </article>\n\
         \x20           <article class=\"card joke-card\">\n\
         \x20               <div class=\"card-header\">\n\
         \x20                   <div class=\"card-icon\">😄</div>\n\
         \x20                   <h2 class=\"card-title\">Joke of the Day</h2>\n\
         \x20               </div>\n\
         \x20               <div class=\"card-body\">\n\
         \x20                   <div class=\"joke-content\">\n\
         \x20                       <p>{joke}</p>\n\
         \x20                   </div>\n\
         \x20               </div>\n\
         \x20           </article>\n\
         \x20       </main>\n",
        phrase = nl2br(&random.phrase),
        joke = nl2br(&random.joke),
    )
}

fn day_list(day: &DayView) -> String {
    let heading = if day.showing_recent {
        "Recent Entries"
    } else {
        "Today's Entries"
    };

    let mut out = format!(
        "        <main class=\"content-grid\">\n\
         \x20           <h2 class=\"section-title\">{}</h2>\n",
        heading
    );

    if day.showing_recent {
        out.push_str(
            "            <p class=\"section-note\">Nothing new today, here are the latest entries.</p>\n",
        );
    }

    if day.entries.is_empty() {
        out.push_str(
            "            <p class=\"empty-state\">No entries yet. Add the first one on the manage page!</p>\n",
        );
    }

    for quote in &day.entries {
        out.push_str(&entry_card(quote));
    }

    out.push_str("        </main>\n");
    out
}

fn entry_card(quote: &Quote) -> String {
    let mut card = format!(
        "            <article class=\"card entry-card\">\n\
         \x20               <div class=\"card-header\">\n\
         \x20                   <span class=\"entry-id\">#{}</span>\n\
         \x20               </div>\n\
         \x20               <div class=\"card-body\">\n",
        quote.id
    );

    if let Some(phrase) = quote.phrase_text() {
        card.push_str(&format!(
            "                    <blockquote class=\"phrase-content\"><p>{}</p></blockquote>\n",
            nl2br(phrase)
        ));
    }
    if let Some(jokes) = quote.jokes_text() {
        card.push_str(&format!(
            "                    <div class=\"joke-content\"><p>{}</p></div>\n",
            nl2br(jokes)
        ));
    }

    let created = quote.created_at.with_timezone(&Local);
    card.push_str(&format!(
        "                </div>\n\
         \x20               <div class=\"card-footer\">\n\
         \x20                   <time datetime=\"{}\">{}</time>\n\
         \x20               </div>\n\
         \x20           </article>\n",
        escape_html(&created.to_rfc3339()),
        created.format("%b %-d, %Y %-I:%M %p"),
    ));
    card
}

fn actions() -> String {
    "        <section class=\"action-section\">\n\
     \x20           <a href=\"/\" class=\"btn-refresh\">\n\
     \x20               <span class=\"btn-icon\">🔄</span>\n\
     \x20               <span>Get New Content</span>\n\
     \x20           </a>\n\
     \x20           <a href=\"/manage\" class=\"btn-manage\">\n\
     \x20               <span class=\"btn-icon\">⚙️</span>\n\
     \x20               <span>Manage Content</span>\n\
     \x20           </a>\n\
     \x20       </section>\n"
        .to_string()
}

const FUN_FACT: &str = "        <aside class=\"fun-fact-section\">\n\
     \x20           <div class=\"fun-fact-card\">\n\
     \x20               <span class=\"fun-fact-icon\">💡</span>\n\
     \x20               <p class=\"fun-fact-text\">Did you know? Laughter can boost your immune system and reduce stress hormones!</p>\n\
     \x20           </div>\n\
     \x20       </aside>\n";

fn footer(view: &DisplayView) -> String {
    format!(
        "        <footer class=\"page-footer\">\n\
         \x20           <p>Made with ❤️ to brighten your day</p>\n\
         \x20           <p class=\"footer-time\">{} • {}</p>\n\
         \x20       </footer>\n",
        view.rendered_at.format("%A, %B %-d, %Y"),
        view.rendered_at.format("%-I:%M %p"),
    )
}
