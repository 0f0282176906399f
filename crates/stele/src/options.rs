use stele_core::{bail, Result};

use std::fmt;
use std::sync::Arc;

/// Consistency levels understood by the wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
    Serial,
    LocalSerial,
}

/// Opaque retry policy reference.
///
/// The mapping core never interprets the policy; it is threaded through each
/// statement unchanged for the executor to apply.
pub trait RetryPolicy: Send + Sync + fmt::Debug {}

/// Per-statement execution options. Unset fields mean "no override": the
/// executor falls back to its own defaults.
///
/// Options are set builder-style:
///
/// ```
/// use stele::{Consistency, QueryOptions};
///
/// let options = QueryOptions::new()
///     .consistency(Consistency::Quorum)
///     .page_size(500);
/// assert_eq!(options.consistency, Some(Consistency::Quorum));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub consistency: Option<Consistency>,
    pub page_size: Option<i32>,
    pub tracing: bool,
    pub retry_policy: Option<Arc<dyn RetryPolicy>>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = Some(consistency);
        self
    }

    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub fn retry_policy(mut self, policy: Arc<dyn RetryPolicy>) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Checked when the options are attached to a statement, so a descriptor
    /// is either fully valid or never produced.
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(page_size) = self.page_size {
            if page_size <= 0 {
                bail!("page size must be positive; got {page_size}");
            }
        }
        Ok(())
    }
}
