use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::campaign::{finance, Campaign, CampaignId, CampaignLine};
use crate::database::Database;
use crate::error::Error;

/// Inserts the sample campaign a fresh deployment starts with. Does nothing
/// when the store already holds data.
pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    if !db.campaigns().fetch_campaigns().await?.is_empty() {
        return Ok(());
    }

    let now = Utc::now();
    let id = CampaignId::generate(now);

    let investment = Decimal::new(1023682, 2);
    let cost = Decimal::new(46774, 1);
    let hidden_cost = Decimal::new(153686, 2);
    let gross_margin = finance::gross_margin(investment, cost, hidden_cost);

    let units = 66820;
    let unit_cost = Decimal::new(15, 2);
    let metrics = finance::line_metrics(units, unit_cost, cost);

    let campaign = Campaign {
        id: id.clone(),
        name: "Nintendo_supermario_Wetransfer_lan_Brazil".to_string(),
        customer: "Africa - Brazil - Omnicom".to_string(),
        brand_advertiser: "Nintendo".to_string(),
        campaign_motto: "SuperMario".to_string(),
        organization_publisher: "Wetransfer".to_string(),
        market: "Brazil".to_string(),
        sales_person: "Carla Rodriguez".to_string(),
        month: "Jan".to_string(),
        investment,
        hidden_cost,
        cost,
        gross_margin,
        gross_margin_percentage: finance::margin_percentage(gross_margin, investment),
        lines: vec![CampaignLine {
            id: format!("{}-line-0", id),
            publisher: "We Transfer".to_string(),
            market: "Brazil".to_string(),
            format: "Video".to_string(),
            units,
            unit_cost,
            investment: metrics.investment,
            margin: metrics.margin,
        }],
        start_date: "2025-01-01".to_string(),
        end_date: "2025-01-31".to_string(),
        status: "active".to_string(),
        created_at: now,
        updated_at: now,
    };

    db.campaigns().put_campaign(&campaign).await?;
    info!("seeded demo campaign {}", campaign.id);

    Ok(())
}
