use actix_web::middleware::DefaultHeaders;
use actix_web::web::{self, Data, JsonConfig, PathConfig, ServiceConfig};
use actix_web::{App, HttpServer, ResponseError};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod assets;
pub mod campaign;
pub mod config;
pub mod database;
pub mod error;
pub mod seed;
pub mod upload;

pub use assets::{AssetStore, MemoryAssetStore, S3AssetStore};
pub use config::Config;
pub use database::{Database, MemoryDatabase, MongoDatabase};
pub use error::Error;

// Leaves room for a 10 MiB upload after base64 and JSON framing overhead.
const MAX_JSON_PAYLOAD_BYTES: usize = 32 * 1024 * 1024;

pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*"))
}

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.app_data(
        JsonConfig::default()
            .limit(MAX_JSON_PAYLOAD_BYTES)
            .error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }),
    )
    .app_data(PathConfig::default().error_handler(|err, _req| {
        // format path errors with custom format
        Error::InvalidPath(err).into()
    }))
    .service(campaign::endpoints::create_campaign)
    .service(campaign::endpoints::get_campaigns)
    .service(campaign::endpoints::get_campaign_by_id)
    .service(campaign::endpoints::update_campaign)
    .service(campaign::endpoints::delete_campaign)
    .service(upload::endpoints::upload_file)
    .default_service(web::to(|| async { Error::RouteNotFound.error_response() }));
}

pub async fn run(config: Config) -> Result<(), Error> {
    info!("connecting to db: {}", config.mongo_uri);
    let client = mongodb::Client::with_uri_str(&config.mongo_uri).await?;
    let db = MongoDatabase::new(client.database(&config.database));

    if config.seed_demo_data {
        seed::seed(&db).await?;
    }

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let assets = S3AssetStore::new(aws_sdk_s3::Client::new(&aws_config), config.s3_bucket.clone());

    info!("listening on {}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors_headers())
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .app_data(Data::new(Box::new(assets.clone()) as Box<dyn AssetStore>))
            .configure(routes)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await?;

    Ok(())
}
