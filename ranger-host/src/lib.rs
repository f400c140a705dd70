//! Host platform capability seams for the Review Ranger usage report.
//!
//! The report never reaches into the host platform directly. It consumes
//! two capabilities and one authorization check:
//! - [`PluginRegistry`] — "is plugin X currently enabled"
//! - [`ContentStore`] — "count stored records whose text contains P"
//! - [`Caller`] — who is asking, and which [`Capability`]s they hold
//!
//! Search literals only reach a [`ContentStore`] wrapped in a
//! [`LikePattern`], which escapes `LIKE` operators once, in one place.

mod access;
mod capability;
mod error;
mod memory;
mod pattern;

pub use access::{Caller, Capability, REPORT_CAPABILITY};
pub use capability::{ContentScope, ContentStore, PluginRegistry};
pub use error::{HostError, HostResult};
pub use memory::{MemoryHost, StoredPost};
pub use pattern::{LIKE_ESCAPE, LikePattern, escape_like};
