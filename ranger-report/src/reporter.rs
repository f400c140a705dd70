use ranger_host::{Caller, ContentStore, PluginRegistry, REPORT_CAPABILITY};
use ranger_model::{Catalog, PluginEntry};
use tracing::{info, warn};

use crate::{PluginStatus, UsageReportRow, classify, render_html};

/// The rows of one report render, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReport {
    rows: Vec<UsageReportRow>,
}

impl UsageReport {
    pub fn rows(&self) -> &[UsageReportRow] {
        &self.rows
    }

    pub fn to_html(&self) -> String {
        render_html(self)
    }
}

/// Runs the usage heuristics against the host's capabilities.
///
/// Holds no state between renders; every call re-queries the host.
pub struct UsageReporter<'a> {
    registry: &'a dyn PluginRegistry,
    content: &'a dyn ContentStore,
}

impl<'a> UsageReporter<'a> {
    pub fn new(registry: &'a dyn PluginRegistry, content: &'a dyn ContentStore) -> Self {
        Self { registry, content }
    }

    /// Renders the report page for `caller`.
    ///
    /// Returns `None`, without issuing any query, when the caller lacks the
    /// report capability.
    pub fn render(&self, caller: &Caller, catalog: &Catalog) -> Option<String> {
        if !caller.can(REPORT_CAPABILITY) {
            warn!(login = caller.login(), "usage report refused: missing capability");
            return None;
        }
        let report = self.build(catalog);
        info!(login = caller.login(), rows = report.rows().len(), "usage report rendered");
        Some(report.to_html())
    }

    /// Classifies every catalog entry in declaration order.
    pub fn build(&self, catalog: &Catalog) -> UsageReport {
        let rows = catalog
            .iter()
            .map(|entry| classify(entry, self.status_of(entry), self.content))
            .collect();
        UsageReport { rows }
    }

    /// Looks up `entry`'s activation state; a failed lookup is `Unknown`.
    pub fn status_of(&self, entry: &PluginEntry) -> PluginStatus {
        match self.registry.is_plugin_active(entry.id()) {
            Ok(active) => PluginStatus::from_active(active),
            Err(err) => {
                warn!(plugin = %entry.id(), error = %err, "activation lookup failed");
                PluginStatus::Unknown
            }
        }
    }
}
