//! Shared constants for talking to Microsoft Graph.

// Graph host
pub const GRAPH_BASE_URL: &str = "https://graph.microsoft.com";

// Environment override for the host (national clouds, local testing)
pub const GRAPH_BASE_URL_ENV: &str = "GRAPH_BASE_URL";

// Signed-in user endpoints
pub const ME_PATH: &str = "/v1.0/me";
pub const ME_PHOTO_PATH: &str = "/v1.0/me/photo/$value";
