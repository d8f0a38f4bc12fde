use clap::Parser;
use clap_derive::Parser;
use tracing::{error, info};
use tracing_subscriber::fmt::format::FmtSpan;

use petstore_contract::{Config, ContractRunner, TestCase, UserApiClient};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, help = "Base URL of the user API under test")]
    base_url: Option<String>,

    #[arg(long, help = "Enable debug logging", default_value = "false")]
    debug: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), eyre::Error> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Load configuration from environment variables, CLI overrides env
    let mut config = Config::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let main_subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(true)
        .with_file(true)
        .with_target(false)
        .with_line_number(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::NONE)
        .with_max_level(if args.debug || config.is_debug_enabled() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(main_subscriber)
        .expect("Unable to set configure logging");

    let client = match UserApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Unable to build API client: {}", e);
            std::process::exit(1);
        }
    };

    let runner = ContractRunner::new(client);
    let report = runner.run(TestCase::table()).await;

    info!(
        "{} passed, {} failed out of {} cases",
        report.passed(),
        report.failed(),
        report.cases.len()
    );
    if !report.is_success() {
        std::process::exit(1);
    }
    info!("Done");
    Ok(())
}
