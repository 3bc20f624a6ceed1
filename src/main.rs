use tvguide::{Config, Guide, RunOptions};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Scrape TV movie listings and enrich them with OMDb metadata.")]
struct Args {
    /// Path to the config file.
    #[arg(long)]
    config: Option<String>,

    /// Target date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Display start time, HH:MM.
    #[arg(long)]
    time: Option<String>,

    /// Output file path.
    #[arg(long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path),
        None => Config::default(),
    };
    let config = config.with_options(RunOptions {
        date: args.date,
        time: args.time,
        outputfile: args.output,
    });

    let guide = Guide::new(config);
    match guide.run().await {
        Ok(movies) => println!("Done. {} movies in the listing.", movies.len()),
        Err(err) => {
            eprintln!("Could not run the guide: {}", err);
            std::process::exit(1);
        }
    }
}
