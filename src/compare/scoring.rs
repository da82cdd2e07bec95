use crate::model::ProposalFields;

// Policy weights. Price and delivery curves are concave so a single cheap or
// fast outlier cannot dominate; warranty is linear because it is measured in
// coarse units. Changing these must preserve monotonicity: non-increasing in
// price and delivery days, non-decreasing in warranty years.
const PRICE_WEIGHT: f64 = 1_000_000.0;
const DELIVERY_WEIGHT: f64 = 1_000.0;
const WARRANTY_WEIGHT: f64 = 100.0;

/// Deterministic desirability score. Each term is optional and contributes 0
/// when its input is absent or non-positive; all-None scores exactly 0.
pub fn objective_score(
    total_price: Option<f64>,
    delivery_days: Option<i64>,
    warranty_years: Option<f64>,
) -> f64 {
    let mut score = 0.0;

    if let Some(price) = total_price.filter(|price| *price > 0.0) {
        score += PRICE_WEIGHT / (1.0 + price);
    }
    if let Some(days) = delivery_days.filter(|days| *days > 0) {
        score += DELIVERY_WEIGHT / (1.0 + days as f64);
    }
    if let Some(years) = warranty_years.filter(|years| *years >= 0.0) {
        score += WARRANTY_WEIGHT * years;
    }

    score
}

pub fn score_fields(fields: &ProposalFields) -> f64 {
    objective_score(
        fields.total_price,
        fields.delivery_days,
        fields.warranty_years,
    )
}
