//! HTML rendering of a usage report.

use std::fmt::Write;

use crate::{PluginStatus, UsageReport};

pub const REPORT_TITLE: &str = "Review Ranger – Plugin Usage Report";

pub const DISCLAIMER: &str = "Note: this tool can’t guarantee a plugin is 100% safe to disable – it simply surfaces where it appears to be used. Always test changes on a staging site or during low-traffic hours.";

const INTRO: &str = "This report shows whether selected plugins are active and where they appear to be used. Use this as a guide before deactivating anything.";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn status_style(status: PluginStatus) -> &'static str {
    match status {
        PluginStatus::Active => "color: #008000; font-weight: 600;",
        PluginStatus::Inactive => "color: #a00; font-weight: 600;",
        PluginStatus::Unknown => "color: #646970; font-weight: 600;",
    }
}

/// Renders the report page body: title, intro, table and disclaimer.
pub fn render_html(report: &UsageReport) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"wrap\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(REPORT_TITLE));
    let _ = writeln!(html, "<p>{}</p>", escape_html(INTRO));
    html.push_str(
        "<table class=\"widefat striped\">\n<thead>\n<tr>\
         <th>Plugin</th><th>Status</th><th>Detected Usage</th><th>Recommendation</th>\
         </tr>\n</thead>\n<tbody>\n",
    );

    for row in report.rows() {
        let _ = writeln!(
            html,
            "<tr>\
             <td><strong>{label}</strong><br><code>{id}</code></td>\
             <td><span class=\"status-{class}\" style=\"{style}\">{status}</span></td>\
             <td>{usage}</td>\
             <td>{recommendation}</td>\
             </tr>",
            label = escape_html(&row.label),
            id = escape_html(row.id.as_str()),
            class = row.status.label().to_ascii_lowercase(),
            style = status_style(row.status),
            status = row.status.label(),
            usage = escape_html(&row.usage),
            recommendation = escape_html(&row.recommendation),
        );
    }

    html.push_str("</tbody>\n</table>\n");
    let _ = writeln!(
        html,
        "<p style=\"margin-top: 1em; font-style: italic;\">{}</p>",
        escape_html(DISCLAIMER)
    );
    html.push_str("</div>\n");
    html
}
