use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use tokio::sync::Mutex;

use crate::error::Error;

#[derive(Clone, Debug)]
pub struct ObjectMetadata {
    pub campaign_id: String,
    pub file_type: String,
}

/// The object-store contract: write a blob with its content type and
/// metadata, and mint a time-limited read URL for an existing key.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        metadata: ObjectMetadata,
    ) -> Result<(), Error>;

    async fn presigned_get_url(&self, key: &str, expiry: Duration) -> Result<String, Error>;
}

#[derive(Clone)]
pub struct S3AssetStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3AssetStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> S3AssetStore {
        S3AssetStore { client, bucket }
    }
}

#[async_trait]
impl AssetStore for S3AssetStore {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        metadata: ObjectMetadata,
    ) -> Result<(), Error> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .metadata("campaign-id", &metadata.campaign_id)
            .metadata("file-type", &metadata.file_type)
            .send()
            .await
            .map_err(|err| Error::FailedObjectStoreCall(err.to_string()))?;

        Ok(())
    }

    async fn presigned_get_url(&self, key: &str, expiry: Duration) -> Result<String, Error> {
        let presigning = PresigningConfig::expires_in(expiry)
            .map_err(|err| Error::FailedObjectStoreCall(err.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|err| Error::FailedObjectStoreCall(err.to_string()))?;

        Ok(request.uri().to_string())
    }
}

#[derive(Clone, Debug)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub metadata: ObjectMetadata,
}

/// Keeps uploaded blobs in a map and hands out mock read URLs. Backs local
/// development and the integration tests.
#[derive(Clone, Default)]
pub struct MemoryAssetStore {
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
}

impl MemoryAssetStore {
    pub fn new() -> MemoryAssetStore {
        MemoryAssetStore::default()
    }

    pub async fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().await.get(key).cloned()
    }

    pub async fn object_count(&self) -> usize {
        self.objects.lock().await.len()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        metadata: ObjectMetadata,
    ) -> Result<(), Error> {
        self.objects.lock().await.insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
                metadata,
            },
        );

        Ok(())
    }

    async fn presigned_get_url(&self, key: &str, expiry: Duration) -> Result<String, Error> {
        Ok(format!("/uploads/{}?expires={}", key, expiry.as_secs()))
    }
}

#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::Error;

    use super::{AssetStore, ObjectMetadata};

    pub struct MockAssetStore {
        pub on_put_object:
            Box<dyn Fn(&str, &[u8], &str, &ObjectMetadata) -> Result<(), Error> + Send + Sync>,
        pub on_presigned_get_url:
            Box<dyn Fn(&str, Duration) -> Result<String, Error> + Send + Sync>,
    }

    impl MockAssetStore {
        pub fn new() -> MockAssetStore {
            MockAssetStore {
                on_put_object: Box::new(|_, _, _, _| panic!("unexpected call to put_object")),
                on_presigned_get_url: Box::new(|_, _| {
                    panic!("unexpected call to presigned_get_url")
                }),
            }
        }
    }

    #[async_trait]
    impl AssetStore for MockAssetStore {
        async fn put_object(
            &self,
            key: &str,
            bytes: Vec<u8>,
            content_type: &str,
            metadata: ObjectMetadata,
        ) -> Result<(), Error> {
            (self.on_put_object)(key, &bytes, content_type, &metadata)
        }

        async fn presigned_get_url(&self, key: &str, expiry: Duration) -> Result<String, Error> {
            (self.on_presigned_get_url)(key, expiry)
        }
    }
}
