// Defaults
pub const DEFAULT_NAMESPACE: &str = "flux-system";
pub const DEFAULT_TIMEOUT: &str = "5m";

// Env vars
pub const NAMESPACE_ENV_VAR: &str = "FLUX_SYSTEM_NAMESPACE";

// User-facing strings
pub const DELETE_SOURCE_PROMPT: &str = "Are you sure you want to delete this source";
pub const SOURCE_DELETED_MSG: &str = "source deleted";

// Reporter markers
pub const ACTION_MARKER: &str = "►";
pub const SUCCESS_MARKER: &str = "✔";
pub const FAILURE_MARKER: &str = "✗";
