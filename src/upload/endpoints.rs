use actix_web::web::{Data, Json};
use actix_web::{post, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::assets::AssetStore;
use crate::error::Error;

use super::manager;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileBody {
    pub file_content: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub campaign_id: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFileBody {
    pub url: String,
    pub key: String,
    pub size: usize,
    pub content_type: String,
}

#[post("/uploads")]
#[tracing::instrument(skip(assets, body))]
pub async fn upload_file(
    assets: Data<Box<dyn AssetStore>>,
    body: Json<UploadFileBody>,
) -> Result<HttpResponse, Error> {
    let uploaded = manager::upload_file(assets.as_ref().as_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(uploaded))
}
