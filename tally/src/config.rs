//! Run configuration threaded through graph invocation.
//!
//! The template carries one configurable integer with no runtime effect; it is
//! kept as an explicit object passed to `invoke` so callers have a seam to
//! grow real configuration into.

use serde::{Deserialize, Serialize};

/// Per-run context passed to `CompiledStateGraph::invoke`.
///
/// Currently a placeholder: `my_configurable_param` is threaded through and
/// never read by any node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Placeholder parameter from the template; no runtime effect.
    pub my_configurable_param: i32,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            my_configurable_param: 0,
        }
    }
}
