use crate::catalog::ActivityCatalog;
use crate::controller::{FormView, ListView};
use crate::flash::Notice;
use crate::models::{Entry, FieldError};

pub fn render_list(view: &ListView, catalog: &ActivityCatalog, notice: Option<Notice>) -> String {
    let rows = if view.entries.is_empty() {
        r#"<tr><td colspan="6" class="empty">No entries yet.</td></tr>"#.to_string()
    } else {
        view.entries
            .iter()
            .map(|entry| render_row(entry, catalog))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let average = view
        .summary
        .average_daily_activity
        .map(|avg| format!("{avg:.1}"))
        .unwrap_or_else(|| "n/a".to_string());

    let notice = notice
        .map(|notice| format!(r#"<p class="notice">{}</p>"#, notice.message()))
        .unwrap_or_default();

    page(
        "Fitness Frog",
        &LIST_HTML
            .replace("{{NOTICE}}", &notice)
            .replace("{{TOTAL}}", &format_number(view.summary.total_activity))
            .replace("{{AVERAGE}}", &average)
            .replace("{{ROWS}}", &rows),
    )
}

fn render_row(entry: &Entry, catalog: &ActivityCatalog) -> String {
    format!(
        r#"<tr{class}><td>{date}</td><td>{activity}</td><td>{duration}</td><td>{exclude}</td><td>{notes}</td><td><a href="/entries/edit/{id}">Edit</a> <a href="/entries/delete/{id}">Delete</a></td></tr>"#,
        class = if entry.exclude { r#" class="excluded""# } else { "" },
        date = entry.date.format("%-m/%-d/%Y"),
        activity = escape(catalog.name_of(entry.activity_id)),
        duration = format_number(entry.duration),
        exclude = if entry.exclude { "Yes" } else { "No" },
        notes = escape(entry.notes.as_deref().unwrap_or("")),
        id = entry.id,
    )
}

/// Add and edit share one form; the edit variant carries the id in a hidden field.
pub fn render_form(view: &FormView<'_>) -> String {
    let (title, action, hidden_id) = match view.form.id.as_deref() {
        Some(id) => (
            "Edit Entry",
            "/entries/edit",
            format!(r#"<input type="hidden" name="id" value="{}" />"#, escape(id)),
        ),
        None => ("Add Entry", "/entries/add", String::new()),
    };

    let options = view
        .activities
        .iter()
        .map(|activity| {
            let selected = if view.form.activity_id.trim() == activity.id.to_string() {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                activity.id,
                escape(&activity.name)
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let summary = if view.errors.is_empty() {
        String::new()
    } else {
        let items = view
            .errors
            .iter()
            .map(|err| format!("<li>{}</li>", escape(&err.message)))
            .collect::<Vec<_>>()
            .join("");
        format!(r#"<ul class="errors">{items}</ul>"#)
    };

    page(
        title,
        &FORM_HTML
            .replace("{{TITLE}}", title)
            .replace("{{ACTION}}", action)
            .replace("{{HIDDEN_ID}}", &hidden_id)
            .replace("{{SUMMARY}}", &summary)
            .replace("{{DATE}}", &escape(&view.form.date))
            .replace("{{DATE_ERROR}}", &field_error(&view.errors, "date"))
            .replace("{{OPTIONS}}", &options)
            .replace("{{ACTIVITY_ERROR}}", &field_error(&view.errors, "activityId"))
            .replace("{{DURATION}}", &escape(&view.form.duration))
            .replace("{{DURATION_ERROR}}", &field_error(&view.errors, "duration"))
            .replace("{{EXCLUDE}}", if view.form.excluded() { " checked" } else { "" })
            .replace("{{NOTES}}", &escape(view.form.notes.as_deref().unwrap_or("")))
            .replace("{{NOTES_ERROR}}", &field_error(&view.errors, "notes")),
    )
}

pub fn render_delete(entry: &Entry, catalog: &ActivityCatalog) -> String {
    page(
        "Delete Entry",
        &DELETE_HTML
            .replace("{{ID}}", &entry.id.to_string())
            .replace("{{DATE}}", &entry.date.format("%-m/%-d/%Y").to_string())
            .replace("{{ACTIVITY}}", &escape(catalog.name_of(entry.activity_id)))
            .replace("{{DURATION}}", &format_number(entry.duration))
            .replace("{{NOTES}}", &escape(entry.notes.as_deref().unwrap_or(""))),
    )
}

fn field_error(errors: &[FieldError], field: &str) -> String {
    errors
        .iter()
        .filter(|err| err.field == field)
        .map(|err| format!(r#"<span class="field-error">{}</span>"#, escape(&err.message)))
        .collect()
}

fn format_number(value: f64) -> String {
    value.to_string()
}

fn page(title: &str, body: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{BODY}}", body)
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #eef6ec;
      --ink: #23321f;
      --accent: #3f8f3a;
      --muted: #6d7a69;
      --card: #ffffff;
      --danger: #b23a2f;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px;
    }

    main {
      width: min(860px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 18px;
      padding: 28px;
      box-shadow: 0 18px 40px rgba(35, 50, 31, 0.12);
    }

    h1 {
      margin-top: 0;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 8px;
      border-bottom: 1px solid #dde7da;
    }

    tr.excluded td {
      color: var(--muted);
      font-style: italic;
    }

    .totals {
      display: flex;
      gap: 24px;
      margin: 16px 0;
    }

    .notice {
      background: #dff0d8;
      padding: 10px 14px;
      border-radius: 10px;
    }

    .errors, .field-error {
      color: var(--danger);
    }

    label {
      display: block;
      margin-top: 12px;
      font-weight: 600;
    }

    button, .button {
      margin-top: 16px;
      background: var(--accent);
      color: white;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      text-decoration: none;
      cursor: pointer;
    }
  </style>
</head>
<body>
  <main>
{{BODY}}
  </main>
</body>
</html>
"#;

const LIST_HTML: &str = r#"    <h1>Entries</h1>
    {{NOTICE}}
    <a class="button" href="/entries/add">Add Entry</a>
    <div class="totals">
      <span>Total Activity: <strong id="total-activity">{{TOTAL}}</strong></span>
      <span>Average Daily Activity: <strong id="average-daily-activity">{{AVERAGE}}</strong></span>
    </div>
    <table>
      <thead>
        <tr><th>Date</th><th>Activity</th><th>Duration</th><th>Exclude</th><th>Notes</th><th></th></tr>
      </thead>
      <tbody>
{{ROWS}}
      </tbody>
    </table>"#;

const FORM_HTML: &str = r#"    <h1>{{TITLE}}</h1>
    {{SUMMARY}}
    <form method="post" action="{{ACTION}}">
      {{HIDDEN_ID}}
      <label for="date">Date</label>
      <input id="date" name="date" type="date" value="{{DATE}}" />
      {{DATE_ERROR}}
      <label for="activityId">Activity</label>
      <select id="activityId" name="activityId">
        <option value="">Select an activity</option>{{OPTIONS}}
      </select>
      {{ACTIVITY_ERROR}}
      <label for="duration">Duration (minutes)</label>
      <input id="duration" name="duration" value="{{DURATION}}" />
      {{DURATION_ERROR}}
      <label for="exclude"><input id="exclude" name="exclude" type="checkbox" value="true"{{EXCLUDE}} /> Exclude from totals</label>
      <label for="notes">Notes</label>
      <textarea id="notes" name="notes">{{NOTES}}</textarea>
      {{NOTES_ERROR}}
      <div>
        <button type="submit">Save</button>
        <a href="/entries">Cancel</a>
      </div>
    </form>"#;

const DELETE_HTML: &str = r#"    <h1>Delete Entry</h1>
    <p>Are you sure you want to delete this entry?</p>
    <dl>
      <dt>Date</dt><dd>{{DATE}}</dd>
      <dt>Activity</dt><dd>{{ACTIVITY}}</dd>
      <dt>Duration</dt><dd>{{DURATION}}</dd>
      <dt>Notes</dt><dd>{{NOTES}}</dd>
    </dl>
    <form method="post" action="/entries/delete/{{ID}}">
      <button type="submit">Delete</button>
      <a href="/entries">Cancel</a>
    </form>"#;
