use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iscs::workload::{WorkloadRunner, DEFAULT_ORDER_SERVICE_URL};

/// Replay a workload file against a running order service.
#[derive(Parser)]
#[command(name = "workload-replay")]
#[command(about = "Replay newline-delimited JSON commands against the order service", long_about = None)]
struct Cli {
    /// Workload file, one JSON command per non-comment line.
    workload_file: PathBuf,

    /// Base URL of the order service.
    #[arg(default_value = DEFAULT_ORDER_SERVICE_URL)]
    order_service_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iscs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Parsing workload from {}", cli.workload_file.display());
    println!("Order Service URL: {}\n", cli.order_service_url);

    let runner = match WorkloadRunner::new(&cli.order_service_url) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let summary = match runner.replay_file(&cli.workload_file).await {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("\nWorkload Summary:");
    println!("Total Commands: {}", summary.total);
    println!("Successful: {}", summary.succeeded);
    println!("Failed: {}", summary.failed);
    println!("Time Elapsed: {:.2}s", summary.elapsed.as_secs_f64());

    ExitCode::SUCCESS
}
