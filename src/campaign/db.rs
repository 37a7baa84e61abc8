use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;
use mongodb::options::ReplaceOptions;
use tokio::sync::Mutex;

use crate::database::MongoCampaignStore;
use crate::error::Error;

use super::{Campaign, CampaignId};

/// The store contract the managers run against: unconditional upsert, scan,
/// point get, and delete on a single string key.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn put_campaign(&self, campaign: &Campaign) -> Result<(), Error>;
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error>;
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Option<Campaign>, Error>;
    async fn delete_campaign(&self, campaign_id: &CampaignId) -> Result<(), Error>;
}

#[async_trait]
impl CampaignStore for MongoCampaignStore {
    async fn put_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        self.replace_one(
            bson::doc! { "_id": &campaign.id },
            campaign,
            ReplaceOptions::builder().upsert(true).build(),
        )
        .await?;

        Ok(())
    }

    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        let campaigns: Vec<Campaign> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(campaigns)
    }

    async fn fetch_campaign_by_id(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        let campaign: Option<Campaign> =
            self.find_one(bson::doc! { "_id": campaign_id }, None).await?;

        Ok(campaign)
    }

    async fn delete_campaign(&self, campaign_id: &CampaignId) -> Result<(), Error> {
        self.delete_one(bson::doc! { "_id": campaign_id }, None)
            .await?;

        Ok(())
    }
}

/// Hash-map store mirroring the managed key-value collaborator. Backs local
/// development and the integration tests; nothing survives a restart.
#[derive(Clone, Default)]
pub struct MemoryCampaignStore {
    items: Arc<Mutex<HashMap<String, Campaign>>>,
}

#[async_trait]
impl CampaignStore for MemoryCampaignStore {
    async fn put_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        self.items
            .lock()
            .await
            .insert(campaign.id.as_str().to_string(), campaign.clone());

        Ok(())
    }

    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        let mut campaigns: Vec<Campaign> = self.items.lock().await.values().cloned().collect();
        campaigns.sort_by(|a, b| {
            (a.created_at, a.id.as_str()).cmp(&(b.created_at, b.id.as_str()))
        });

        Ok(campaigns)
    }

    async fn fetch_campaign_by_id(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        Ok(self.items.lock().await.get(campaign_id.as_str()).cloned())
    }

    async fn delete_campaign(&self, campaign_id: &CampaignId) -> Result<(), Error> {
        self.items.lock().await.remove(campaign_id.as_str());

        Ok(())
    }
}
