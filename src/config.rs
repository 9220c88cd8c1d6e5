//! Configuration constants

use std::time::Duration;

/// Namespace queried when a call does not name one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Connect/read timeout applied to upstream API calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
