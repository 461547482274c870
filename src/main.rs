use std::time::Instant;

use clap::Parser;

use lanesim::Config;

#[derive(Parser)]
#[command(name = "lanesim")]
#[command(about = "Checkout-lane wait time simulation")]
struct Cli {
    /// Mean customer arrivals per minute
    #[arg(long, default_value = "18")]
    arrival_rate: f64,

    /// Highest lane count to simulate
    #[arg(long, default_value = "10")]
    max_lanes: usize,

    /// Simulated days averaged into each lane count's result
    #[arg(long, default_value = "50")]
    iterations: u32,

    /// Seed the arrival generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Run lane counts on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Emit results as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = Config::builder()
        .arrival_rate(cli.arrival_rate)
        .max_lanes(cli.max_lanes)
        .iterations(cli.iterations)
        .seed(cli.seed)
        .parallel(cli.parallel)
        .build();

    if !cli.json {
        println!("Arrival Rate: {}", cli.arrival_rate);
    }

    let start = Instant::now();
    let records = match lanesim::run(cfg) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if cli.json {
        let out = serde_json::to_string_pretty(&records).expect("records serialize cleanly");
        println!("{out}");
    } else {
        for record in &records {
            println!("{record}");
        }
        println!(
            "This simulation completed in {} nanoseconds.",
            elapsed.as_nanos()
        );
    }
}
