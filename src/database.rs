use mongodb::{Collection, Database as MongoDb};

use crate::campaign::db::{CampaignStore, MemoryCampaignStore};
use crate::campaign::Campaign;

pub type MongoCampaignStore = Collection<Campaign>;

pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
}

#[derive(Clone)]
pub struct MongoDatabase {
    campaigns: Collection<Campaign>,
}

impl MongoDatabase {
    pub fn new(db: MongoDb) -> MongoDatabase {
        MongoDatabase {
            campaigns: db.collection("campaigns"),
        }
    }
}

impl Database for MongoDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }
}

#[derive(Clone, Default)]
pub struct MemoryDatabase {
    campaigns: MemoryCampaignStore,
}

impl MemoryDatabase {
    pub fn new() -> MemoryDatabase {
        MemoryDatabase::default()
    }
}

impl Database for MemoryDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }
}

#[cfg(test)]
pub mod test {
    use async_trait::async_trait;

    use crate::campaign::db::CampaignStore;
    use crate::campaign::{Campaign, CampaignId};
    use crate::error::Error;

    use super::Database;

    pub struct MockDatabase {
        pub campaigns: MockCampaignStore,
    }

    impl MockDatabase {
        pub fn new() -> MockDatabase {
            MockDatabase {
                campaigns: MockCampaignStore::new(),
            }
        }
    }

    impl Database for MockDatabase {
        fn campaigns(&self) -> &dyn CampaignStore {
            &self.campaigns
        }
    }

    pub struct MockCampaignStore {
        pub on_put_campaign: Box<dyn Fn(&Campaign) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_campaigns: Box<dyn Fn() -> Result<Vec<Campaign>, Error> + Send + Sync>,
        pub on_fetch_campaign_by_id:
            Box<dyn Fn(&CampaignId) -> Result<Option<Campaign>, Error> + Send + Sync>,
        pub on_delete_campaign: Box<dyn Fn(&CampaignId) -> Result<(), Error> + Send + Sync>,
    }

    impl MockCampaignStore {
        pub fn new() -> MockCampaignStore {
            MockCampaignStore {
                on_put_campaign: Box::new(|_| panic!("unexpected call to put_campaign")),
                on_fetch_campaigns: Box::new(|| panic!("unexpected call to fetch_campaigns")),
                on_fetch_campaign_by_id: Box::new(|_| {
                    panic!("unexpected call to fetch_campaign_by_id")
                }),
                on_delete_campaign: Box::new(|_| panic!("unexpected call to delete_campaign")),
            }
        }
    }

    #[async_trait]
    impl CampaignStore for MockCampaignStore {
        async fn put_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
            (self.on_put_campaign)(campaign)
        }

        async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns)()
        }

        async fn fetch_campaign_by_id(
            &self,
            campaign_id: &CampaignId,
        ) -> Result<Option<Campaign>, Error> {
            (self.on_fetch_campaign_by_id)(campaign_id)
        }

        async fn delete_campaign(&self, campaign_id: &CampaignId) -> Result<(), Error> {
            (self.on_delete_campaign)(campaign_id)
        }
    }
}
