use clap::Parser;
use polly_client::utils::{error::PollyError, logger};
use polly_client::{CliConfig, Command, ConfigProvider, PollApi, PollyClient};
use serde_json::Value;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    match run(&cli).await {
        Ok(body) => match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{}", text),
            Err(e) => exit_with(PollyError::Serialization(e)),
        },
        Err(e) => exit_with(e),
    }
}

async fn run(cli: &CliConfig) -> polly_client::Result<Value> {
    let config = cli.resolve()?;
    tracing::debug!("Resolved config: base_url={}, timeout={:?}", config.base_url(), config.timeout());

    let client = PollyClient::from_config(&config)?;
    let api: &dyn PollApi = &client;
    let token = config.token().unwrap_or_default();

    match cli.command {
        Command::Vote { poll_id, option_id } => {
            tracing::info!("Casting vote for option {} on poll {}", option_id, poll_id);
            api.cast_vote(poll_id, option_id, token).await
        }
        Command::Results { poll_id } => {
            tracing::info!("Fetching results for poll {}", poll_id);
            api.get_poll_results(poll_id, token).await
        }
    }
}

fn exit_with(e: PollyError) -> ! {
    tracing::error!("❌ Request failed: {} (status: {:?})", e, e.status());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
