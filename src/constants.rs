pub const STACKBLITZ_API_URL: &str = "https://api.stackblitz.com";
pub const CONFIG_FILE: &str = ".stackblitz-graph.json";

pub const API_KEY_ENV: &str = "STACKBLITZ_API_KEY";
pub const API_URL_ENV: &str = "STACKBLITZ_API_URL";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Separates kind and local id inside a decoded global id.
pub const GLOBAL_ID_SEPARATOR: char = ':';

// Query parameter names understood by the REST list endpoints
pub const LIMIT_PARAM: &str = "limit";
pub const CURSOR_PARAM: &str = "cursor";
