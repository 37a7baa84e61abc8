use std::fmt::Display;

use chrono::{DateTime, Utc};
use mongodb::bson::Bson;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod db;
pub mod endpoints;
pub mod finance;
pub mod manager;
pub use endpoints::*;

/// Campaign ids keep the original wall-clock decimal-string shape, with a
/// random suffix so concurrent creates within one millisecond cannot collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    pub fn generate(now: DateTime<Utc>) -> CampaignId {
        let entropy: u16 = rand::thread_rng().gen_range(0..10_000);
        CampaignId(format!("{}{:04}", now.timestamp_millis(), entropy))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(&self.0)
    }
}

impl From<String> for CampaignId {
    fn from(id: String) -> CampaignId {
        CampaignId(id)
    }
}

impl From<&str> for CampaignId {
    fn from(id: &str) -> CampaignId {
        CampaignId(id.to_string())
    }
}

impl From<&CampaignId> for Bson {
    fn from(id: &CampaignId) -> Bson {
        Bson::String(id.0.clone())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: CampaignId,
    pub name: String,
    pub customer: String,
    pub brand_advertiser: String,
    pub campaign_motto: String,
    pub organization_publisher: String,
    pub market: String,
    pub sales_person: String,
    pub month: String,
    pub investment: Decimal,
    pub hidden_cost: Decimal,
    pub cost: Decimal,
    pub gross_margin: Decimal,
    pub gross_margin_percentage: Decimal,
    pub lines: Vec<CampaignLine>,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignLine {
    pub id: String,
    pub publisher: String,
    pub market: String,
    pub format: String,
    pub units: i64,
    pub unit_cost: Decimal,
    pub investment: Decimal,
    pub margin: Decimal,
}
