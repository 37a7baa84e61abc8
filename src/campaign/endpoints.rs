use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, Campaign, CampaignId, CampaignLine};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignBody {
    pub name: Option<String>,
    pub customer: Option<String>,
    pub brand_advertiser: Option<String>,
    pub campaign_motto: Option<String>,
    pub organization_publisher: Option<String>,
    pub market: Option<String>,
    pub sales_person: Option<String>,
    pub month: Option<String>,
    pub investment: Option<Decimal>,
    pub hidden_cost: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub lines: Option<Vec<CreateLineBody>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignBody {
    pub name: Option<String>,
    pub customer: Option<String>,
    pub brand_advertiser: Option<String>,
    pub campaign_motto: Option<String>,
    pub organization_publisher: Option<String>,
    pub market: Option<String>,
    pub sales_person: Option<String>,
    pub month: Option<String>,
    pub investment: Option<Decimal>,
    pub hidden_cost: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub lines: Option<Vec<CreateLineBody>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineBody {
    pub publisher: Option<String>,
    pub market: Option<String>,
    pub format: Option<String>,
    pub units: i64,
    pub unit_cost: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBody {
    pub id: CampaignId,
    pub name: String,
    pub customer: String,
    pub brand_advertiser: String,
    pub campaign_motto: String,
    pub organization_publisher: String,
    pub market: String,
    pub sales_person: String,
    pub month: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub investment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub hidden_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_margin: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_margin_percentage: Decimal,
    pub lines: Vec<LineBody>,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CampaignBody {
    pub fn render(campaign: Campaign) -> CampaignBody {
        CampaignBody {
            id: campaign.id,
            name: campaign.name,
            customer: campaign.customer,
            brand_advertiser: campaign.brand_advertiser,
            campaign_motto: campaign.campaign_motto,
            organization_publisher: campaign.organization_publisher,
            market: campaign.market,
            sales_person: campaign.sales_person,
            month: campaign.month,
            investment: campaign.investment,
            hidden_cost: campaign.hidden_cost,
            cost: campaign.cost,
            gross_margin: campaign.gross_margin,
            gross_margin_percentage: campaign.gross_margin_percentage,
            lines: campaign.lines.into_iter().map(LineBody::render).collect(),
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            status: campaign.status,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBody {
    pub id: String,
    pub publisher: String,
    pub market: String,
    pub format: String,
    pub units: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub investment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub margin: Decimal,
}

impl LineBody {
    pub fn render(line: CampaignLine) -> LineBody {
        LineBody {
            id: line.id,
            publisher: line.publisher,
            market: line.market,
            format: line.format,
            units: line.units,
            unit_cost: line.unit_cost,
            investment: line.investment,
            margin: line.margin,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignDeletedBody {
    pub message: String,
}

#[post("/campaigns")]
#[tracing::instrument(skip(db))]
pub async fn create_campaign(
    db: Data<Box<dyn Database>>,
    body: Json<CreateCampaignBody>,
) -> Result<HttpResponse, Error> {
    let campaign = manager::create_campaign(db.as_ref().as_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(CampaignBody::render(campaign)))
}

#[get("/campaigns")]
#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: Data<Box<dyn Database>>) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::get_campaigns(db.as_ref().as_ref()).await?;

    Ok(Json(
        campaigns.into_iter().map(CampaignBody::render).collect(),
    ))
}

#[get("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::get_campaign_by_id(db.as_ref().as_ref(), campaign_id).await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[put("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn update_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
    body: Json<UpdateCampaignBody>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::update_campaign(db.as_ref().as_ref(), campaign_id, body.into_inner()).await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[delete("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn delete_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignDeletedBody>, Error> {
    let campaign_id = params.into_inner();

    manager::delete_campaign(db.as_ref().as_ref(), campaign_id).await?;

    Ok(Json(CampaignDeletedBody {
        message: "Campaign deleted successfully".to_string(),
    }))
}
