use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;

use crate::assets::{AssetStore, ObjectMetadata};
use crate::error::Error;

use super::endpoints::{UploadFileBody, UploadedFileBody};
use super::{ALLOWED_CONTENT_TYPES, DEFAULT_CONTENT_TYPE, MAX_FILE_BYTES, PRESIGNED_URL_EXPIRY};

#[tracing::instrument(skip(assets, body))]
pub async fn upload_file(
    assets: &dyn AssetStore,
    body: UploadFileBody,
) -> Result<UploadedFileBody, Error> {
    let file_content = body.file_content.ok_or(Error::MissingUploadField {
        field: "fileContent",
    })?;
    let file_name = body.file_name.ok_or(Error::MissingUploadField {
        field: "fileName",
    })?;

    let bytes = STANDARD
        .decode(file_content.as_bytes())
        .map_err(|_| Error::InvalidFileContent)?;

    if bytes.len() > MAX_FILE_BYTES {
        return Err(Error::FileTooLarge { size: bytes.len() });
    }

    let content_type = body
        .content_type
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
    if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
        return Err(Error::UnsupportedFileType { content_type });
    }

    let file_type = body.file_type.unwrap_or_else(|| "other".to_string());
    let campaign_id = body.campaign_id.unwrap_or_else(|| "general".to_string());
    let key = format!(
        "{}/{}/{}-{}",
        file_type,
        campaign_id,
        Utc::now().timestamp_millis(),
        file_name
    );

    let size = bytes.len();
    assets
        .put_object(
            &key,
            bytes,
            &content_type,
            ObjectMetadata {
                campaign_id,
                file_type,
            },
        )
        .await?;

    let url = assets.presigned_get_url(&key, PRESIGNED_URL_EXPIRY).await?;

    tracing::info!(%key, size, "stored campaign asset");

    Ok(UploadedFileBody {
        url,
        key,
        size,
        content_type,
    })
}
