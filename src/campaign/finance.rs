use rust_decimal::Decimal;

/// Gross margin is investment minus direct cost minus hidden cost.
pub fn gross_margin(investment: Decimal, cost: Decimal, hidden_cost: Decimal) -> Decimal {
    investment - cost - hidden_cost
}

/// A margin expressed as a percentage of investment. Zero investment yields
/// exactly zero rather than dividing.
pub fn margin_percentage(margin: Decimal, investment: Decimal) -> Decimal {
    if investment == Decimal::ZERO {
        return Decimal::ZERO;
    }
    margin / investment * Decimal::ONE_HUNDRED
}

#[derive(Clone, Copy, Debug)]
pub struct LineMetrics {
    pub investment: Decimal,
    pub margin: Decimal,
}

/// Derived figures for one media-plan line. The margin is computed against
/// the parent campaign's total cost, not a per-line cost; that coupling is
/// how the books have always been kept and changing it would shift every
/// reported line margin.
pub fn line_metrics(units: i64, unit_cost: Decimal, campaign_cost: Decimal) -> LineMetrics {
    let investment = Decimal::from(units) * unit_cost;
    let margin = margin_percentage(investment - campaign_cost, investment);
    LineMetrics { investment, margin }
}
