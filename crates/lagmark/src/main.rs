use clap::Parser;
use lagmark_core::to_json_pretty;
use lagmark_engine::run_probes;
use tracing::info;

mod load;

#[derive(Parser)]
#[command(name = "lagmark", about = "Lagmark concurrent latency probe harness")]
struct Cli {
    /// Path to the JSON file holding the probe list
    file: String,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize tracing; log events go to stderr so stdout carries only
    // the JSON report document
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let specs = load::load_probes(&cli.file)?;
    info!("Loaded {} probes from '{}'", specs.len(), cli.file);

    let reports = run_probes(specs).await;

    let json = to_json_pretty(&reports)?;
    println!("{}", json);

    Ok(())
}
