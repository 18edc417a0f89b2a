use super::CalculatorError;
use serde::{Deserialize, Serialize};

/// Assumed average hourly cost for data engineering work.
const HOURLY_COST: f64 = 150.0;
/// Assumed monthly hours spent on data management.
const MONTHLY_HOURS: f64 = 160.0;

const MIN_DATA_VOLUME_GB: f64 = 50.0;
const MAX_DATA_VOLUME_GB: f64 = 2_000.0;
const MIN_EFFICIENCY_PERCENT: f64 = 10.0;
const MAX_EFFICIENCY_PERCENT: f64 = 90.0;

/// Engagement tier driving the formula constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLevel {
    Basic,
    Standard,
    Premium,
    Enterprise,
}

impl ServiceLevel {
    pub const fn efficiency_gain(self) -> f64 {
        match self {
            ServiceLevel::Basic => 0.20,
            ServiceLevel::Standard => 0.35,
            ServiceLevel::Premium => 0.50,
            ServiceLevel::Enterprise => 0.65,
        }
    }

    /// Engagement cost in currency units.
    pub const fn engagement_cost(self) -> u32 {
        match self {
            ServiceLevel::Basic => 10_000,
            ServiceLevel::Standard => 25_000,
            ServiceLevel::Premium => 50_000,
            ServiceLevel::Enterprise => 100_000,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ServiceLevel::Basic => "basic",
            ServiceLevel::Standard => "standard",
            ServiceLevel::Premium => "premium",
            ServiceLevel::Enterprise => "enterprise",
        }
    }
}

/// Industry adjustment category. Unrecognized industries fall back to
/// `Other` (factor 1.0) rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Industry {
    Finance,
    Healthcare,
    Retail,
    Manufacturing,
    Other,
}

impl From<String> for Industry {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "finance" => Industry::Finance,
            "healthcare" => Industry::Healthcare,
            "retail" => Industry::Retail,
            "manufacturing" => Industry::Manufacturing,
            _ => Industry::Other,
        }
    }
}

impl Industry {
    pub const fn adjustment_factor(self) -> f64 {
        match self {
            Industry::Finance => 1.20,
            Industry::Healthcare => 1.15,
            Industry::Retail => 1.10,
            Industry::Manufacturing => 1.05,
            Industry::Other => 1.00,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInput {
    #[serde(rename = "dataVolumeGB")]
    pub data_volume_gb: f64,
    pub current_efficiency_percent: f64,
    pub service_level: ServiceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
}

/// Modernization approach chosen by the fixed decision table on
/// (data volume, current efficiency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedApproach {
    #[serde(rename = "Complete data infrastructure overhaul with cloud migration")]
    CompleteOverhaul,
    #[serde(rename = "Targeted modernization of key data pipelines with hybrid architecture")]
    TargetedModernization,
    #[serde(rename = "Incremental optimization with focused performance enhancements")]
    IncrementalOptimization,
    #[serde(rename = "Fine-tuning and governance improvements for existing systems")]
    FineTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub time_reduction_percent: u32,
    pub monthly_cost_savings: u32,
    pub annual_savings: u32,
    pub roi_percent: i64,
    /// `None` when annual savings are zero and payback is indeterminate.
    pub payback_period_months: Option<u32>,
    pub recommended_approach: RecommendedApproach,
}

/// Closed-form ROI estimate. Deterministic: identical input always
/// produces an identical estimate.
pub fn estimate(input: &RoiInput) -> Result<RoiEstimate, CalculatorError> {
    validate(input)?;

    let base_gain = input.service_level.efficiency_gain();
    let engagement_cost = input.service_level.engagement_cost();
    let industry_factor = input
        .industry
        .map_or(1.0, Industry::adjustment_factor);

    // Lower current efficiency leaves more room for improvement.
    let efficiency_factor = 1.0 - input.current_efficiency_percent / 100.0;
    let adjusted_gain = base_gain * (1.0 + efficiency_factor);

    // Larger volumes benefit more, capped at 1.5x.
    let volume_factor = (0.8 + input.data_volume_gb / 2_000.0).min(1.5);

    let time_reduction_percent =
        (adjusted_gain * volume_factor * industry_factor * 100.0).round() as u32;
    let monthly_cost_savings =
        (time_reduction_percent as f64 / 100.0 * HOURLY_COST * MONTHLY_HOURS).round() as u32;
    let annual_savings = monthly_cost_savings * 12;

    let roi_percent = ((annual_savings as f64 - engagement_cost as f64) / engagement_cost as f64
        * 100.0)
        .round() as i64;

    let payback_period_months = if annual_savings == 0 {
        None
    } else {
        Some((engagement_cost as f64 / annual_savings as f64 * 12.0).round() as u32)
    };

    Ok(RoiEstimate {
        time_reduction_percent,
        monthly_cost_savings,
        annual_savings,
        roi_percent,
        payback_period_months,
        recommended_approach: recommend(input.data_volume_gb, input.current_efficiency_percent),
    })
}

fn recommend(data_volume_gb: f64, current_efficiency_percent: f64) -> RecommendedApproach {
    if data_volume_gb > 1_000.0 && current_efficiency_percent < 40.0 {
        RecommendedApproach::CompleteOverhaul
    } else if data_volume_gb > 500.0 && current_efficiency_percent < 60.0 {
        RecommendedApproach::TargetedModernization
    } else if current_efficiency_percent < 70.0 {
        RecommendedApproach::IncrementalOptimization
    } else {
        RecommendedApproach::FineTuning
    }
}

/// Next-step plan keyed off the computed ROI.
pub fn next_steps(roi_percent: i64) -> &'static [&'static str; 3] {
    if roi_percent > 200 {
        &[
            "Schedule a comprehensive data assessment",
            "Set up a technical architecture planning session",
            "Develop a phased implementation roadmap",
        ]
    } else if roi_percent > 100 {
        &[
            "Begin with a focused pilot project",
            "Identify your highest-impact data workflows",
            "Schedule a technical scoping workshop",
        ]
    } else {
        &[
            "Start with a data maturity assessment",
            "Identify quick-win optimization opportunities",
            "Schedule an introductory consultation",
        ]
    }
}

/// Steps returned alongside a generated report.
pub const REPORT_NEXT_STEPS: [&str; 3] = [
    "Review your detailed ROI analysis report",
    "Schedule a consultation with our data engineering experts",
    "Explore our case studies for similar implementations in your industry",
];

fn validate(input: &RoiInput) -> Result<(), CalculatorError> {
    if !input.data_volume_gb.is_finite()
        || !(MIN_DATA_VOLUME_GB..=MAX_DATA_VOLUME_GB).contains(&input.data_volume_gb)
    {
        return Err(CalculatorError::InvalidInput(format!(
            "dataVolumeGB must be between {MIN_DATA_VOLUME_GB} and {MAX_DATA_VOLUME_GB}"
        )));
    }
    if !input.current_efficiency_percent.is_finite()
        || !(MIN_EFFICIENCY_PERCENT..=MAX_EFFICIENCY_PERCENT)
            .contains(&input.current_efficiency_percent)
    {
        return Err(CalculatorError::InvalidInput(format!(
            "currentEfficiencyPercent must be between {MIN_EFFICIENCY_PERCENT} and {MAX_EFFICIENCY_PERCENT}"
        )));
    }
    Ok(())
}
