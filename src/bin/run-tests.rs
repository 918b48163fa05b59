use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iscs::harness::runner::{DEFAULT_FIXTURES_DIR, DEFAULT_ORDER_SERVICE_URL};
use iscs::harness::TestHarness;

/// Run the fixture test suites against a running order service.
#[derive(Parser)]
#[command(name = "run-tests")]
#[command(about = "Fixture-driven regression tests for the order service", long_about = None)]
struct Cli {
    /// Fixture root containing payloads/ and responses/.
    #[arg(long, default_value = DEFAULT_FIXTURES_DIR)]
    fixtures: PathBuf,

    /// Base URL of the order service.
    #[arg(long, default_value = DEFAULT_ORDER_SERVICE_URL)]
    url: String,
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

    println!("FIXTURE TEST SUITE");
    println!("{}", "=".repeat(80));
    println!("Order Service URL: {}", cli.url);
    println!("Test Cases Dir: {}", cli.fixtures.display());

    let harness = match TestHarness::new(&cli.url, cli.fixtures.clone()) {
        Ok(harness) => harness,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    if !harness.fixtures_present() {
        eprintln!(
            "ERROR: {} must contain payloads/ and responses/",
            cli.fixtures.display()
        );
        return ExitCode::FAILURE;
    }

    println!("\nChecking if the order service is running...");
    if !harness.service_reachable().await {
        eprintln!("WARNING: could not connect to the order service at {}", cli.url);
        return ExitCode::FAILURE;
    }
    println!("Order service is running");

    let report = harness.run_all().await;

    println!("\n{}", "=".repeat(80));
    println!("TEST SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Passed:  {}", report.passed);
    println!("Failed:  {}", report.failed);
    println!("Errors:  {}", report.errors);
    println!("Skipped: {}", report.skipped);
    println!("Total:   {}", report.total());

    if !report.failures.is_empty() {
        println!("\n{} Test(s) Failed:", report.failures.len());
        for (name, reason) in &report.failures {
            println!("  - {name}: {reason}");
        }
    }

    if report.all_green() {
        println!("\nALL TESTS PASSED");
        ExitCode::SUCCESS
    } else {
        println!("\n{} test(s) failed", report.failed + report.errors);
        ExitCode::FAILURE
    }
}
