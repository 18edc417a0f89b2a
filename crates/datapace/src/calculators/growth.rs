use super::CalculatorError;
use serde::{Deserialize, Serialize};

/// Bounds mirror the sliders on the public calculator.
const MIN_GROWTH_RATE: f64 = 1.0;
const MAX_GROWTH_RATE: f64 = 100.0;
const MIN_TIMEFRAME_YEARS: u32 = 1;
const MAX_TIMEFRAME_YEARS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjectionInput {
    pub initial_revenue: f64,
    pub annual_growth_rate_percent: f64,
    pub timeframe_years: u32,
}

/// A single derived data point; year 0 is the starting revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjectionPoint {
    pub year: u32,
    pub projected_revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjection {
    pub points: Vec<GrowthProjectionPoint>,
    pub total_growth_percent: i64,
}

/// Compound-growth projection: `timeframe_years + 1` points where
/// `revenue[i] = round(initial * (1 + rate/100)^i)`.
pub fn project(input: &GrowthProjectionInput) -> Result<GrowthProjection, CalculatorError> {
    validate(input)?;

    let rate = 1.0 + input.annual_growth_rate_percent / 100.0;
    let mut points = Vec::with_capacity(input.timeframe_years as usize + 1);
    for year in 0..=input.timeframe_years {
        let projected = input.initial_revenue * rate.powi(year as i32);
        points.push(GrowthProjectionPoint {
            year,
            projected_revenue: projected.round() as i64,
        });
    }

    let last = points[points.len() - 1].projected_revenue;
    let total_growth_percent =
        ((last as f64 - input.initial_revenue) / input.initial_revenue * 100.0).round() as i64;

    Ok(GrowthProjection {
        points,
        total_growth_percent,
    })
}

fn validate(input: &GrowthProjectionInput) -> Result<(), CalculatorError> {
    if !input.initial_revenue.is_finite() || input.initial_revenue <= 0.0 {
        return Err(CalculatorError::InvalidInput(
            "initialRevenue must be a positive number".to_string(),
        ));
    }
    if !input.annual_growth_rate_percent.is_finite()
        || !(MIN_GROWTH_RATE..=MAX_GROWTH_RATE).contains(&input.annual_growth_rate_percent)
    {
        return Err(CalculatorError::InvalidInput(format!(
            "annualGrowthRatePercent must be between {MIN_GROWTH_RATE} and {MAX_GROWTH_RATE}"
        )));
    }
    if !(MIN_TIMEFRAME_YEARS..=MAX_TIMEFRAME_YEARS).contains(&input.timeframe_years) {
        return Err(CalculatorError::InvalidInput(format!(
            "timeframeYears must be between {MIN_TIMEFRAME_YEARS} and {MAX_TIMEFRAME_YEARS}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(revenue: f64, rate: f64, years: u32) -> GrowthProjectionInput {
        GrowthProjectionInput {
            initial_revenue: revenue,
            annual_growth_rate_percent: rate,
            timeframe_years: years,
        }
    }

    #[test]
    fn five_year_projection_matches_worked_example() {
        let projection = project(&input(10_000.0, 15.0, 5)).expect("valid input");
        assert_eq!(projection.points.len(), 6);
        assert_eq!(projection.points[0].projected_revenue, 10_000);
        assert_eq!(projection.points[5].projected_revenue, 20_114);
        assert_eq!(projection.total_growth_percent, 101);
    }

    #[test]
    fn first_point_always_equals_initial_revenue() {
        for rate in [1.0, 15.0, 50.0, 100.0] {
            let projection = project(&input(42_500.0, rate, 3)).expect("valid input");
            assert_eq!(projection.points[0].year, 0);
            assert_eq!(projection.points[0].projected_revenue, 42_500);
        }
    }

    #[test]
    fn revenue_is_non_decreasing() {
        let projection = project(&input(9_999.0, 7.5, 10)).expect("valid input");
        for pair in projection.points.windows(2) {
            assert!(pair[1].projected_revenue >= pair[0].projected_revenue);
        }
    }

    #[test]
    fn rejects_non_positive_revenue() {
        assert!(matches!(
            project(&input(0.0, 15.0, 5)),
            Err(CalculatorError::InvalidInput(_))
        ));
        assert!(matches!(
            project(&input(-100.0, 15.0, 5)),
            Err(CalculatorError::InvalidInput(_))
        ));
        assert!(matches!(
            project(&input(f64::NAN, 15.0, 5)),
            Err(CalculatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_rate_and_timeframe() {
        assert!(project(&input(10_000.0, 0.5, 5)).is_err());
        assert!(project(&input(10_000.0, 101.0, 5)).is_err());
        assert!(project(&input(10_000.0, 15.0, 0)).is_err());
        assert!(project(&input(10_000.0, 15.0, 11)).is_err());
    }

    #[test]
    fn input_round_trips_through_json() {
        let original = input(25_000.0, 12.0, 7);
        let body = serde_json::to_string(&original).expect("serializes");
        let decoded: GrowthProjectionInput = serde_json::from_str(&body).expect("deserializes");
        assert_eq!(decoded, original);
    }
}
