use crate::infra::{parse_industry, parse_service_level, InMemoryLeadRepository};
use clap::Args;
use datapace::calculators::{growth, maturity, roi, GrowthProjectionInput, QuizResponse, RoiInput};
use datapace::calculators::{Industry, ServiceLevel};
use datapace::chat;
use datapace::error::AppError;
use datapace::leads::{InquiryDraft, LeadIntakeService, SubscriptionDraft, SubscriptionOutcome};
use datapace::pipeline::{PipelineRun, PipelineStage, RunStatus, StageState};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RoiArgs {
    /// Monthly data volume in gigabytes (50-2000)
    #[arg(long)]
    pub(crate) data_volume_gb: f64,
    /// Current process efficiency percentage (10-90)
    #[arg(long)]
    pub(crate) current_efficiency: f64,
    /// Engagement tier: basic, standard, premium, or enterprise
    #[arg(long, value_parser = parse_service_level)]
    pub(crate) service_level: ServiceLevel,
    /// Industry for the adjustment factor (unknown values fall back to a neutral factor)
    #[arg(long, value_parser = parse_industry)]
    pub(crate) industry: Option<Industry>,
    /// Print the recommended next steps for the computed ROI
    #[arg(long)]
    pub(crate) next_steps: bool,
}

#[derive(Args, Debug)]
pub(crate) struct GrowthArgs {
    /// Current annual revenue
    #[arg(long)]
    pub(crate) initial_revenue: f64,
    /// Expected annual growth rate percentage (1-100)
    #[arg(long)]
    pub(crate) growth_rate: f64,
    /// Projection horizon in years (1-10)
    #[arg(long, default_value_t = 5)]
    pub(crate) years: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Inject a failure at the named pipeline stage (extract, transform, load, analyze)
    #[arg(long, value_parser = parse_stage)]
    pub(crate) fail_stage: Option<PipelineStage>,
    /// Skip the lead intake portion of the demo
    #[arg(long)]
    pub(crate) skip_intake: bool,
}

pub(crate) fn run_roi(args: RoiArgs) -> Result<(), AppError> {
    let input = RoiInput {
        data_volume_gb: args.data_volume_gb,
        current_efficiency_percent: args.current_efficiency,
        service_level: args.service_level,
        industry: args.industry,
    };

    let estimate = roi::estimate(&input)?;
    render_roi_estimate(&input, &estimate);

    if args.next_steps {
        println!("\nRecommended next steps");
        for step in roi::next_steps(estimate.roi_percent) {
            println!("- {step}");
        }
    }

    Ok(())
}

pub(crate) fn run_growth(args: GrowthArgs) -> Result<(), AppError> {
    let input = GrowthProjectionInput {
        initial_revenue: args.initial_revenue,
        annual_growth_rate_percent: args.growth_rate,
        timeframe_years: args.years,
    };

    let projection = growth::project(&input)?;
    render_growth_projection(&projection);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Datapace site backend demo");

    println!("\nROI estimate (500 GB, 30% efficiency, standard tier)");
    let roi_input = RoiInput {
        data_volume_gb: 500.0,
        current_efficiency_percent: 30.0,
        service_level: ServiceLevel::Standard,
        industry: None,
    };
    let estimate = roi::estimate(&roi_input)?;
    render_roi_estimate(&roi_input, &estimate);

    println!("\nGrowth projection ($250k revenue at 15% for 5 years)");
    let projection = growth::project(&GrowthProjectionInput {
        initial_revenue: 250_000.0,
        annual_growth_rate_percent: 15.0,
        timeframe_years: 5,
    })?;
    render_growth_projection(&projection);

    println!("\nMaturity assessment (answers 3, 4, 2, 3, 4)");
    let responses: Vec<QuizResponse> = [3, 4, 2, 3, 4]
        .iter()
        .enumerate()
        .map(|(index, &answer)| QuizResponse {
            id: index as u8 + 1,
            answer,
        })
        .collect();
    let result = maturity::score(&responses)?;
    println!(
        "- Score {} -> {:?} tier: {}",
        result.total_score, result.tier, result.summary
    );
    for recommendation in result.recommendations {
        println!("  - {recommendation}");
    }

    println!("\nChat auto-responder");
    for message in ["What does the premium plan cost?", "hello there"] {
        println!("  Q: {message}");
        println!("  A: {}", chat::auto_reply(message));
    }

    if !args.skip_intake {
        run_intake_demo();
    }

    println!("\nPipeline showcase");
    run_pipeline_demo(args.fail_stage);

    Ok(())
}

fn run_intake_demo() {
    println!("\nLead intake (in-memory store)");
    let repository = Arc::new(InMemoryLeadRepository::default());
    let service = LeadIntakeService::new(repository.clone());

    let draft = InquiryDraft {
        name: "Demo Prospect".to_string(),
        email: "prospect@example.com".to_string(),
        service_id: "professional".to_string(),
        company: Some("Example Corp".to_string()),
        phone: None,
        message: Some("Interested in a warehouse migration.".to_string()),
        budget_range: None,
        timeline: Some("Q4".to_string()),
    };
    match service.submit_inquiry(draft) {
        Ok(record) => println!(
            "- Inquiry {} stored for {} ({} records total)",
            record.id.0,
            record.service_type,
            repository.inquiry_count()
        ),
        Err(err) => println!("- Inquiry rejected: {err}"),
    }

    let signup = SubscriptionDraft {
        email: "prospect@example.com".to_string(),
    };
    match service.subscribe(signup.clone()) {
        Ok(SubscriptionOutcome::Subscribed(record)) => {
            println!("- Newsletter subscription {} stored", record.id.0)
        }
        Ok(SubscriptionOutcome::AlreadySubscribed) => {
            println!("- Newsletter signup acknowledged (already subscribed)")
        }
        Err(err) => println!("- Newsletter signup rejected: {err}"),
    }
    match service.subscribe(signup) {
        Ok(SubscriptionOutcome::AlreadySubscribed) => {
            println!("- Duplicate signup handled without a second record")
        }
        other => println!("- Unexpected duplicate signup outcome: {other:?}"),
    }
}

fn run_pipeline_demo(fail_stage: Option<PipelineStage>) {
    let mut run = match fail_stage {
        Some(stage) => PipelineRun::with_fault(stage),
        None => PipelineRun::new(),
    };

    loop {
        let status = run.advance();
        render_pipeline_snapshot(&run);
        match status {
            RunStatus::Complete => {
                println!("Run complete");
                break;
            }
            RunStatus::Failed(stage) => {
                println!("Run failed at the {} stage; reset to retry", stage.label());
                break;
            }
            RunStatus::Idle | RunStatus::Running(_) => {}
        }
    }
}

fn render_pipeline_snapshot(run: &PipelineRun) {
    let line = run
        .stages()
        .iter()
        .map(|(stage, state)| format!("{} [{}]", stage.label(), stage_state_label(*state)))
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("  {line}");
}

fn stage_state_label(state: StageState) -> &'static str {
    match state {
        StageState::Idle => "idle",
        StageState::Running => "running",
        StageState::Complete => "complete",
        StageState::Error => "error",
    }
}

fn render_roi_estimate(input: &RoiInput, estimate: &datapace::calculators::RoiEstimate) {
    println!(
        "- Service level {} | volume {:.0} GB | efficiency {:.0}%",
        input.service_level.label(),
        input.data_volume_gb,
        input.current_efficiency_percent
    );
    println!(
        "- Time reduction {}% | monthly savings ${} | annual savings ${}",
        estimate.time_reduction_percent, estimate.monthly_cost_savings, estimate.annual_savings
    );
    match estimate.payback_period_months {
        Some(months) => println!(
            "- ROI {}% | payback in {} month(s)",
            estimate.roi_percent, months
        ),
        None => println!("- ROI {}% | payback indeterminate", estimate.roi_percent),
    }
}

fn render_growth_projection(projection: &datapace::calculators::GrowthProjection) {
    for point in &projection.points {
        println!("- Year {}: ${}", point.year, point.projected_revenue);
    }
    println!("- Total growth: {}%", projection.total_growth_percent);
}

fn parse_stage(raw: &str) -> Result<PipelineStage, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "extract" => Ok(PipelineStage::Extract),
        "transform" => Ok(PipelineStage::Transform),
        "load" => Ok(PipelineStage::Load),
        "analyze" => Ok(PipelineStage::Analyze),
        other => Err(format!(
            "'{other}' is not a pipeline stage (expected extract, transform, load, or analyze)"
        )),
    }
}
