//! HTML rendering of the planning page.

use plancal_core::calendar::MonthGrid;
use plancal_core::cards::Card;
use plancal_core::dates::format_date;
use plancal_core::form::{FormMode, FormView};

const PAGE_TITLE: &str = "Interactive Content Calendar";

const SAMPLE_IDEAS: [&str; 5] = [
    "Blog Post",
    "YouTube Video",
    "Email Newsletter",
    "LinkedIn Post",
    "Instagram Story",
];

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; background: #fff; color: #222; }
main { max-width: 760px; margin: 0 auto; padding: 1rem; }
details, .entry-form, .notice, .info { margin: 1rem 0; }
.entry-form label { display: block; margin: .5rem 0; }
.notice { background: #e6f4ea; padding: .6rem; border-radius: 5px; }
.info { background: #e8f0fe; padding: .6rem; border-radius: 5px; }
.card { background: #f0f4f8; padding: 10px; border-left: 6px solid #4f8bf9; margin: 10px 0 4px;
        border-radius: 5px; overflow-wrap: break-word; white-space: pre-wrap; max-width: 600px; }
.card-actions form { display: inline-block; margin-right: .5rem; }
.month { width: 100%; border-collapse: collapse; table-layout: fixed; }
.month th, .month td { border: 1px solid #ddd; vertical-align: top; padding: 2px; height: 4.5rem; }
.month td.outside { color: #aaa; background: #fafafa; }
.month .event { background: #4f8bf9; color: #fff; border-radius: 3px; margin: 1px 0; padding: 1px 3px;
                font-size: .8rem; white-space: normal; }
.month-nav { display: flex; justify-content: space-between; align-items: center; }
";

/// Confirmation shown after a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
}

impl Notice {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "added" => Some(Notice::Added),
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            _ => None,
        }
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::Added => "✅ Added to your calendar!",
            Notice::Updated => "✅ Updated successfully!",
            Notice::Deleted => "✅ Deleted.",
        }
    }
}

pub struct PageView {
    pub form: FormView,
    pub cards: Vec<Card>,
    pub grid: MonthGrid,
    pub notice: Option<Notice>,
}

pub fn page(view: &PageView) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{PAGE_TITLE}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<main>\n\
         <h1>📅 {PAGE_TITLE}</h1>\n"
    ));

    if let Some(notice) = view.notice {
        html.push_str(&format!("<p class=\"notice\">{}</p>\n", notice.message()));
    }

    html.push_str(&sample_ideas());
    html.push_str(&form(&view.form));

    if view.cards.is_empty() {
        html.push_str(
            "<p class=\"info\">No content yet. Use the form above to get started!</p>\n",
        );
    } else {
        html.push_str("<h2>📆 Your Content Cards</h2>\n");
        for card in &view.cards {
            html.push_str(&card_html(card));
        }
        html.push_str("<h2>📅 Monthly Calendar View</h2>\n");
        html.push_str(&month_grid(&view.grid));
        html.push_str("<p><a href=\"/export.csv\" download>⬇️ Download CSV</a></p>\n");
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn sample_ideas() -> String {
    let items: String = SAMPLE_IDEAS
        .iter()
        .map(|idea| format!("<li>{idea}</li>"))
        .collect();
    format!("<details>\n<summary>💡 Sample Content Ideas</summary>\n<ul>{items}</ul>\n</details>\n")
}

fn form(view: &FormView) -> String {
    let icon = match view.mode {
        FormMode::Add => "➕",
        FormMode::Edit => "✏️",
    };

    let mut html = format!(
        "<form class=\"entry-form\" method=\"post\" action=\"/entries\">\n\
         <h2>{icon} {heading}</h2>\n\
         <label>Title <input type=\"text\" name=\"title\" value=\"{title}\"></label>\n\
         <label>Content Type <input type=\"text\" name=\"content_type\" value=\"{content_type}\"></label>\n\
         <label>Start Date <input type=\"date\" name=\"start_date\" value=\"{start}\" required></label>\n\
         <label>Number of Days <input type=\"number\" name=\"num_days\" min=\"1\" max=\"30\" value=\"{num_days}\" required></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n",
        heading = view.heading,
        title = escape(&view.title),
        content_type = escape(&view.content_type),
        start = format_date(view.start_date),
        num_days = view.num_days,
    );

    if view.mode == FormMode::Edit {
        html.push_str(
            "<form method=\"post\" action=\"/entries/cancel-edit\">\
             <button type=\"submit\">Add new instead</button></form>\n",
        );
    }

    html
}

fn card_html(card: &Card) -> String {
    format!(
        "<div class=\"card\"><strong>{content_type}:</strong> {title}<br>📅 {dates}</div>\n\
         <div class=\"card-actions\">\
         <form method=\"post\" action=\"{edit}\"><button type=\"submit\">✏️ Edit</button></form>\
         <form method=\"post\" action=\"{delete}\"><button type=\"submit\">🗑️ Delete</button></form>\
         </div>\n",
        content_type = escape(&card.content_type),
        title = escape(&card.title),
        dates = card.date_line(),
        edit = card.edit_action(),
        delete = card.delete_action(),
    )
}

fn month_grid(grid: &MonthGrid) -> String {
    let mut html = format!(
        "<div class=\"month-nav\">\
         <a href=\"/?month={prev}\">&larr;</a><strong>{title}</strong><a href=\"/?month={next}\">&rarr;</a>\
         </div>\n<table class=\"month\">\n<tr>",
        prev = grid.previous().format("%Y-%m"),
        next = grid.next().format("%Y-%m"),
        title = grid.title(),
    );
    for weekday in WEEKDAYS {
        html.push_str(&format!("<th>{weekday}</th>"));
    }
    html.push_str("</tr>\n");

    for week in &grid.weeks {
        html.push_str("<tr>");
        for day in week {
            let class = if day.in_month { "" } else { " class=\"outside\"" };
            let events: String = day
                .events
                .iter()
                .map(|label| format!("<div class=\"event\">{}</div>", escape(label)))
                .collect();
            html.push_str(&format!(
                "<td{class}><div class=\"day\">{}</div>{events}</td>",
                day.date.format("%-d")
            ));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n");
    html
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use plancal_core::calendar::{MonthGrid, to_calendar_events};
    use plancal_core::form::FormView;
    use plancal_core::{EditState, Entry, EntryFields};

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn view_with(entries: &[Entry], notice: Option<Notice>) -> PageView {
        PageView {
            form: FormView::for_state(&EditState::None, june(1)),
            cards: entries.iter().map(Card::from_entry).collect(),
            grid: MonthGrid::build(june(1), &to_calendar_events(entries)),
            notice,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"Q&A\"</b>"), "&lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_notice_round_trip() {
        for notice in [Notice::Added, Notice::Updated, Notice::Deleted] {
            assert_eq!(Notice::parse(notice.as_query()), Some(notice));
        }
        assert_eq!(Notice::parse("bogus"), None);
    }

    #[test]
    fn test_empty_page_shows_hint_and_no_download() {
        let html = page(&view_with(&[], Some(Notice::Added)));
        assert!(html.contains("No content yet. Use the form above to get started!"));
        assert!(html.contains("Added to your calendar!"));
        assert!(html.contains("Add New Content"));
        assert!(!html.contains("/export.csv"));
        for idea in SAMPLE_IDEAS {
            assert!(html.contains(idea));
        }
    }

    #[test]
    fn test_page_with_entries() {
        let entry = Entry {
            id: 9,
            owner_id: "me".into(),
            fields: EntryFields::new("<Launch> Post", "Blog Post", june(1), 3),
        };
        let html = page(&view_with(&[entry], None));

        assert!(html.contains("<strong>Blog Post:</strong> &lt;Launch&gt; Post"));
        assert!(html.contains("Saturday, June 01, 2024 to Monday, June 03, 2024 (3 days)"));
        assert!(html.contains("action=\"/entries/9/edit\""));
        assert!(html.contains("action=\"/entries/9/delete\""));
        assert!(html.contains("June 2024"));
        assert!(html.contains("href=\"/?month=2024-05\""));
        assert!(html.contains("href=\"/?month=2024-07\""));
        assert_eq!(html.matches("<div class=\"event\">").count(), 3);
        assert!(html.contains("/export.csv"));
    }
}
