use std::env;

/// Runtime settings, read once at startup. Every variable has a local-dev
/// default so a bare `cargo run` comes up against a local store.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub mongo_uri: String,
    pub database: String,
    pub s3_bucket: String,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            mongo_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: env::var("DATABASE_NAME").unwrap_or_else(|_| "campman".to_string()),
            s3_bucket: env::var("S3_BUCKET_NAME").unwrap_or_else(|_| "campaign-assets".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
