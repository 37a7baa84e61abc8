use chrono::Utc;
use rust_decimal::Decimal;

use crate::database::Database;
use crate::error::Error;

use super::endpoints::{CreateCampaignBody, CreateLineBody, UpdateCampaignBody};
use super::finance;
use super::{Campaign, CampaignId, CampaignLine};

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, Error> {
    value.ok_or(Error::MissingField { field })
}

// Line ids are positional: replacing the line sequence renumbers them.
fn build_lines(
    campaign_id: &CampaignId,
    lines: Vec<CreateLineBody>,
    campaign_cost: Decimal,
    campaign_market: &str,
) -> Vec<CampaignLine> {
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let metrics = finance::line_metrics(line.units, line.unit_cost, campaign_cost);
            CampaignLine {
                id: format!("{}-line-{}", campaign_id, index),
                publisher: line.publisher.unwrap_or_default(),
                market: line.market.unwrap_or_else(|| campaign_market.to_string()),
                format: line.format.unwrap_or_else(|| "Video".to_string()),
                units: line.units,
                unit_cost: line.unit_cost,
                investment: metrics.investment,
                margin: metrics.margin,
            }
        })
        .collect()
}

#[tracing::instrument(skip(db, body))]
pub async fn create_campaign(
    db: &dyn Database,
    body: CreateCampaignBody,
) -> Result<Campaign, Error> {
    let name = require("name", body.name)?;
    let customer = require("customer", body.customer)?;
    let brand_advertiser = require("brandAdvertiser", body.brand_advertiser)?;
    let organization_publisher = require("organizationPublisher", body.organization_publisher)?;
    let market = require("market", body.market)?;
    let sales_person = require("salesPerson", body.sales_person)?;
    let month = require("month", body.month)?;
    let investment = require("investment", body.investment)?;
    let cost = require("cost", body.cost)?;
    let start_date = require("startDate", body.start_date)?;
    let end_date = require("endDate", body.end_date)?;
    let status = require("status", body.status)?;

    if investment <= Decimal::ZERO {
        return Err(Error::InvalidInvestment);
    }

    let hidden_cost = body.hidden_cost.unwrap_or(Decimal::ZERO);
    let gross_margin = finance::gross_margin(investment, cost, hidden_cost);
    let gross_margin_percentage = finance::margin_percentage(gross_margin, investment);

    let now = Utc::now();
    let id = CampaignId::generate(now);
    let lines = build_lines(&id, body.lines.unwrap_or_default(), cost, &market);

    let campaign = Campaign {
        id,
        name,
        customer,
        brand_advertiser,
        campaign_motto: body.campaign_motto.unwrap_or_default(),
        organization_publisher,
        market,
        sales_person,
        month,
        investment,
        hidden_cost,
        cost,
        gross_margin,
        gross_margin_percentage,
        lines,
        start_date,
        end_date,
        status,
        created_at: now,
        updated_at: now,
    };

    db.campaigns().put_campaign(&campaign).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(&campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound { campaign_id })?;

    Ok(campaign)
}

#[tracing::instrument(skip(db, body))]
pub async fn update_campaign(
    db: &dyn Database,
    campaign_id: CampaignId,
    body: UpdateCampaignBody,
) -> Result<Campaign, Error> {
    let mut campaign = db
        .campaigns()
        .fetch_campaign_by_id(&campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound { campaign_id })?;

    if let Some(name) = body.name {
        campaign.name = name;
    }
    if let Some(customer) = body.customer {
        campaign.customer = customer;
    }
    if let Some(brand_advertiser) = body.brand_advertiser {
        campaign.brand_advertiser = brand_advertiser;
    }
    if let Some(campaign_motto) = body.campaign_motto {
        campaign.campaign_motto = campaign_motto;
    }
    if let Some(organization_publisher) = body.organization_publisher {
        campaign.organization_publisher = organization_publisher;
    }
    if let Some(market) = body.market {
        campaign.market = market;
    }
    if let Some(sales_person) = body.sales_person {
        campaign.sales_person = sales_person;
    }
    if let Some(month) = body.month {
        campaign.month = month;
    }
    if let Some(investment) = body.investment {
        campaign.investment = investment;
    }
    if let Some(hidden_cost) = body.hidden_cost {
        campaign.hidden_cost = hidden_cost;
    }
    if let Some(cost) = body.cost {
        campaign.cost = cost;
    }
    if let Some(start_date) = body.start_date {
        campaign.start_date = start_date;
    }
    if let Some(end_date) = body.end_date {
        campaign.end_date = end_date;
    }
    if let Some(status) = body.status {
        campaign.status = status;
    }

    // A supplied line sequence replaces the old one wholesale, computed
    // against the merged cost and market.
    if let Some(lines) = body.lines {
        let lines = build_lines(&campaign.id, lines, campaign.cost, &campaign.market);
        campaign.lines = lines;
    }

    campaign.gross_margin =
        finance::gross_margin(campaign.investment, campaign.cost, campaign.hidden_cost);
    campaign.gross_margin_percentage =
        finance::margin_percentage(campaign.gross_margin, campaign.investment);
    campaign.updated_at = Utc::now();

    db.campaigns().put_campaign(&campaign).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn delete_campaign(db: &dyn Database, campaign_id: CampaignId) -> Result<(), Error> {
    db.campaigns()
        .fetch_campaign_by_id(&campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound {
            campaign_id: campaign_id.clone(),
        })?;

    db.campaigns().delete_campaign(&campaign_id).await?;

    Ok(())
}
