use std::time::Duration;

pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

pub const PRESIGNED_URL_EXPIRY: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub const ALLOWED_CONTENT_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/pdf",
    "image/svg+xml",
];

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
