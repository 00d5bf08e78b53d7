use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use tracing_subscriber::EnvFilter;

use tripbench::agents::{Optimizer, ScoreOrigin};
use tripbench::config::Credentials;
use tripbench::cost::{PricingTable, TokenCounter};
use tripbench::llm::OpenAiChat;
use tripbench::lookups::{MapsClient, Units, WeatherClient};
use tripbench::prompts::PromptCatalog;
use tripbench::runner::{Pipeline, StyleReport};

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "Travel Planner - prompt style evaluation".bold());
    let start = ask("Enter starting location (e.g. San Francisco, CA): ");
    let end = ask("Enter destination location (e.g. Los Angeles, CA): ");
    let units = Units::parse(&ask("Enter units (metric/imperial) [default: metric]: "));

    let credentials = Credentials::from_env();
    let pricing = PricingTable::gpt4();
    let counter = match TokenCounter::for_model(&pricing.model) {
        Ok(counter) => counter,
        Err(err) => fail(&err.to_string()),
    };
    let chat = OpenAiChat::new(&credentials.openai_api_key, &pricing.model);

    let pipeline = Pipeline::new(
        PromptCatalog::standard(),
        Box::new(chat),
        Optimizer::new(pricing, counter),
        MapsClient::new(&credentials.maps_key),
        WeatherClient::new(&credentials.weather_key),
    );

    match pipeline.run(&start, &end, units) {
        Ok(reports) => {
            for report in &reports {
                print_report(report);
            }
        }
        Err(err) => fail(&err.to_string()),
    }
}

fn ask(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message);
    std::process::exit(1);
}

fn print_report(report: &StyleReport) {
    let score = match report.verdict.origin {
        ScoreOrigin::Parsed => report.verdict.score.to_string(),
        ScoreOrigin::Fallback => format!("{} (fallback)", report.verdict.score),
    };

    println!("\n====================");
    println!("Prompt Style: {}", report.style.cyan().bold());
    println!("Prompt: {}", report.prompt);
    println!("Scratchpad: {}", report.scratchpad.dimmed());
    println!("Score: {}", score.yellow());
    println!(
        "Latency (sec): {} | Estimated Cost: ${:.4}",
        report.usage.latency_secs, report.usage.estimated_cost
    );
    println!(
        "Route OK: {} | Weather OK: {} | POI OK: {}",
        flag(report.feasibility.route_ok),
        flag(report.feasibility.weather_ok),
        flag(report.feasibility.poi_ok)
    );
    println!("Agent Response: {}", report.plan);
    println!("Evaluation: {}", report.verdict.raw);
}

fn flag(ok: bool) -> ColoredString {
    if ok {
        "true".green()
    } else {
        "false".red()
    }
}
