//! Plugin usage classification and report rendering for Review Ranger.
//!
//! One render is a single stateless pass over the catalog:
//!
//! 1. refuse silently unless the caller holds `manage_options`
//! 2. for each entry, in declaration order, look up its activation status and
//!    run the category's heuristic ([`classify`])
//! 3. render the rows as an HTML table with a closing disclaimer
//!
//! Only `shortcode` and `elementor` entries query the content store. A query
//! failure is confined to the row it belongs to.

mod classify;
mod render;
mod reporter;

pub use classify::{
    PluginStatus, UsageReportRow, classify, count_content_matches, count_layout_matches,
};
pub use render::{DISCLAIMER, REPORT_TITLE, escape_html, render_html};
pub use reporter::{UsageReport, UsageReporter};
