use crate::infra::{parse_date, Engines};
use altlend::config::AppConfig;
use altlend::error::AppError;
use altlend::money::{format_inr, format_lakhs};
use altlend::workflows::lending::{LoanQuote, LoanTerms};
use altlend::workflows::underwriting::{
    CustomerAnalysis, CustomerSignals, ProfileSource, ScoreOutcome,
};
use altlend::workflows::valuation::{PropertyDetails, PropertyType, PropertyValuation, RateSource};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Risk score supplied by the bureau or internal model
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) risk_score: i32,
    /// Digital-payment transactions observed
    #[arg(long, default_value_t = 0)]
    pub(crate) transactions: u32,
    /// Failed payments observed
    #[arg(long, default_value_t = 0)]
    pub(crate) failures: u32,
    /// Utility payment score (0-100)
    #[arg(long, default_value_t = 0)]
    pub(crate) utility_score: u8,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Borrower name; partial matches hit the sample book
    #[arg(long)]
    pub(crate) name: String,
}

#[derive(Args, Debug)]
pub(crate) struct EmiArgs {
    /// Loan principal in rupees
    #[arg(long)]
    pub(crate) principal: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) rate: f64,
    /// Tenure in whole years
    #[arg(long)]
    pub(crate) tenure: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum PropertyTypeArg {
    Residential,
    Commercial,
    Plot,
}

impl From<PropertyTypeArg> for PropertyType {
    fn from(value: PropertyTypeArg) -> Self {
        match value {
            PropertyTypeArg::Residential => PropertyType::Residential,
            PropertyTypeArg::Commercial => PropertyType::Commercial,
            PropertyTypeArg::Plot => PropertyType::Plot,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ValuateArgs {
    #[arg(long, value_enum, default_value_t = PropertyTypeArg::Residential)]
    pub(crate) property_type: PropertyTypeArg,
    #[arg(long)]
    pub(crate) city: String,
    /// Locality within the city
    #[arg(long)]
    pub(crate) area: String,
    /// Built-up size in square feet
    #[arg(long)]
    pub(crate) size: u32,
    /// CSV of circle rates replacing the configured table
    #[arg(long)]
    pub(crate) rates_csv: Option<PathBuf>,
    /// Report date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Borrower to analyze
    #[arg(long, default_value = "Rohit Sharma")]
    pub(crate) customer: String,
    #[arg(long, default_value = "Pune")]
    pub(crate) city: String,
    #[arg(long, default_value = "Baner")]
    pub(crate) area: String,
    #[arg(long, default_value_t = 1_000)]
    pub(crate) size: u32,
    /// Report date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn load_engines(rates_csv: Option<&PathBuf>) -> Result<Engines, AppError> {
    let config = AppConfig::load()?;
    Engines::from_config(&config.lending, rates_csv.map(PathBuf::as_path))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let signals = CustomerSignals {
        transaction_count: args.transactions,
        payment_failure_count: args.failures,
        utility_payment_score: args.utility_score,
        risk_score: args.risk_score,
    };

    let engines = load_engines(None)?;
    let outcome = engines.desk.engine().score(&signals)?;
    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let engines = load_engines(None)?;
    let analysis = engines.desk.analyze(&args.name)?;
    render_analysis(&analysis);
    Ok(())
}

pub(crate) fn run_emi(args: EmiArgs) -> Result<(), AppError> {
    let terms = LoanTerms::new(args.principal, args.rate, args.tenure)?;
    let breakdown = terms.breakdown()?;

    println!(
        "Loan of {} at {:.2}% for {} years",
        format_inr(args.principal.round() as u64),
        args.rate,
        args.tenure
    );
    println!(
        "- Monthly EMI: {} over {} installments",
        format_inr(breakdown.monthly_installment),
        breakdown.installments
    );
    println!("- Total payable: {}", format_inr(breakdown.total_payable));
    println!("- Total interest: {}", format_inr(breakdown.total_interest));
    Ok(())
}

pub(crate) fn run_valuate(args: ValuateArgs) -> Result<(), AppError> {
    let engines = load_engines(args.rates_csv.as_ref())?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let valuation = engines.valuation.valuate(property_from_args(&args), today)?;
    render_valuation(&valuation);
    Ok(())
}

pub(crate) fn run_quote(args: ValuateArgs) -> Result<(), AppError> {
    let engines = load_engines(args.rates_csv.as_ref())?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let valuation = engines.valuation.valuate(property_from_args(&args), today)?;
    let quote = engines.quotes.quote(
        valuation.max_loan_amount as f64,
        &quote_subject(&valuation),
        today,
    )?;

    render_valuation(&valuation);
    render_quote(&quote);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        customer,
        city,
        area,
        size,
        today,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let engines = load_engines(None)?;

    println!("Alternative lending desk demo ({today})");

    println!("\nUnderwriting");
    match engines.desk.analyze(&customer) {
        Ok(analysis) => render_analysis(&analysis),
        Err(err) => println!("  Analysis unavailable: {err}"),
    }

    println!("\nProperty valuation");
    let property = PropertyDetails {
        property_type: PropertyType::Residential,
        city,
        area,
        size_sq_ft: size,
    };
    let valuation = match engines.valuation.valuate(property, today) {
        Ok(valuation) => valuation,
        Err(err) => {
            println!("  Valuation unavailable: {err}");
            return Ok(());
        }
    };
    render_valuation(&valuation);

    println!("\nIndicative quote");
    match engines.quotes.quote(
        valuation.max_loan_amount as f64,
        &quote_subject(&valuation),
        today,
    ) {
        Ok(quote) => render_quote(&quote),
        Err(err) => println!("  Quote unavailable: {err}"),
    }

    Ok(())
}

fn property_from_args(args: &ValuateArgs) -> PropertyDetails {
    PropertyDetails {
        property_type: args.property_type.into(),
        city: args.city.clone(),
        area: args.area.clone(),
        size_sq_ft: args.size,
    }
}

fn quote_subject(valuation: &PropertyValuation) -> String {
    format!("{}/{}", valuation.property.city, valuation.property.area)
}

fn render_outcome(outcome: &ScoreOutcome) {
    println!(
        "Risk score {} -> {}",
        outcome.risk_score,
        outcome.recommendation.label()
    );
    println!("  {}", outcome.rationale);
}

fn render_analysis(analysis: &CustomerAnalysis) {
    let profile = &analysis.profile;
    let source = match analysis.source {
        ProfileSource::Sample => "sample book",
        ProfileSource::Synthetic => "seeded synthetic data",
    };

    println!("- Customer: {} ({})", profile.name, source);
    if let Some(segment) = profile.segment {
        println!("  Segment: {}", segment.label());
    }
    if let Some(amount) = profile.requested_loan_amount {
        println!("  Requested loan: {}", format_inr(amount));
    }
    println!(
        "  UPI transactions: {} | payment success {}% | failures {}",
        profile.signals.transaction_count,
        analysis.insights.payment_success_pct,
        profile.signals.payment_failure_count
    );
    println!(
        "  Avg monthly spend: {} | utility score {}/100 | on-time payments {}%",
        format_inr(u64::from(profile.average_monthly_spend)),
        profile.signals.utility_payment_score,
        profile.on_time_payment_pct
    );
    render_outcome(&analysis.outcome);

    println!("  Risk factors (presentation only):");
    for factor in &analysis.insights.risk_factors {
        println!(
            "    - {}: {:.1} ({:?})",
            factor.kind.label(),
            factor.score,
            factor.origin
        );
    }
}

fn render_valuation(valuation: &PropertyValuation) {
    let property = &valuation.property;
    println!(
        "- {} property, {} sq ft in {}, {}",
        property.property_type.label(),
        property.size_sq_ft,
        property.area,
        property.city
    );
    if valuation.rate_source == RateSource::Fallback {
        println!(
            "  No circle rate on file; valued on {}/{} rates",
            valuation.rate.city, valuation.rate.area
        );
    }
    println!(
        "  Circle rate {}/sq ft | market rate {}/sq ft",
        format_inr(valuation.rate.circle_rate),
        format_inr(valuation.rate.market_rate)
    );
    println!(
        "  Estimated value {} ({}) | confidence {}%",
        format_inr(valuation.estimated_value),
        format_lakhs(valuation.estimated_value as f64),
        valuation.confidence_score
    );
    println!(
        "  Max loan at {:.0}% LTV: {}",
        valuation.loan_to_value * 100.0,
        format_inr(valuation.max_loan_amount)
    );
}

fn render_quote(quote: &LoanQuote) {
    println!(
        "- Loan amount {} at {:.2}% p.a. onwards (issued {})",
        format_inr(quote.loan_amount),
        quote.interest_rate_percent,
        quote.issued_on
    );
    println!(
        "  Tenure up to {} years | processing fee {:.2}% ({})",
        quote.max_tenure_years,
        quote.processing_fee_percent,
        format_inr(quote.processing_fee)
    );
    println!(
        "  Monthly EMI over {} years: {}",
        quote.illustration_tenure_years,
        format_inr(quote.monthly_installment)
    );
    println!("  Next steps:");
    for (index, step) in quote.next_steps.iter().enumerate() {
        println!("    {}. {}", index + 1, step);
    }
}
