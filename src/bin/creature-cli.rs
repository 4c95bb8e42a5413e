use clap::Parser;
use creature_sdk::{CreatureFinder, CreatureSummary, MemorySink, SearchOutcome, DEFAULT_ENDPOINT};

#[derive(Parser)]
#[command(name = "creature-cli")]
#[command(about = "Look a creature up through a running creature proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Print the analytics event published for a hit.
    #[arg(long)]
    show_event: bool,

    /// Creature id as typed by the user (e.g. 25).
    #[arg(default_value = "")]
    id: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let sink = MemorySink::new();
    let finder = CreatureFinder::with_endpoint(&cli.url, &cli.endpoint, sink.clone())?;

    match finder.search(&cli.id).await? {
        SearchOutcome::Found(record) => {
            print!("{}", CreatureSummary::from_record(&record));
            if cli.show_event {
                for event in sink.events() {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
        }
        SearchOutcome::Failed { status, message } => {
            eprintln!("Error ({}): {}", status.as_u16(), message);
            std::process::exit(1);
        }
    }

    Ok(())
}

