use crate::demo::{
    run_analyze, run_demo, run_emi, run_quote, run_score, run_valuate, AnalyzeArgs, DemoArgs,
    EmiArgs, ScoreArgs, ValuateArgs,
};
use crate::server;
use altlend::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Alternative Lending Desk",
    about = "Run the alternative-data underwriting and property valuation desk",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score explicit behavioral signals
    Score(ScoreArgs),
    /// Analyze a borrower by name (sample book or seeded synthetic data)
    Analyze(AnalyzeArgs),
    /// Compute the monthly installment for a loan
    Emi(EmiArgs),
    /// Value a property from circle and market rates
    Valuate(ValuateArgs),
    /// Value a property and issue an indicative loan quote
    Quote(ValuateArgs),
    /// Walk through analysis, valuation, and quote for one borrower
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Analyze(args) => run_analyze(args),
        Command::Emi(args) => run_emi(args),
        Command::Valuate(args) => run_valuate(args),
        Command::Quote(args) => run_quote(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_risk_scores() {
        let cli = Cli::try_parse_from([
            "altlend-api",
            "score",
            "--risk-score",
            "-20",
            "--transactions",
            "10",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.risk_score, -20);
                assert_eq!(args.transactions, 10);
                assert_eq!(args.failures, 0);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn quote_reuses_valuation_arguments() {
        let cli = Cli::try_parse_from([
            "altlend-api",
            "quote",
            "--property-type",
            "commercial",
            "--city",
            "Indore",
            "--area",
            "Vijay Nagar",
            "--size",
            "1200",
            "--today",
            "2026-10-16",
        ])
        .expect("arguments parse");

        assert!(matches!(cli.command, Some(Command::Quote(args)) if args.size == 1200));
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["altlend-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
