use journey_assistant::cache::{CachedRmvClient, StationCacheConfig};
use journey_assistant::config::SkillConfig;
use journey_assistant::intent::JourneyIntent;
use journey_assistant::journey::DepartureFinder;
use journey_assistant::respond;
use journey_assistant::rmv::{RmvClient, RmvConfig};

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "JOURNEY_CONFIG";

/// Default config file path.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = SkillConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Failed to load {config_path}: {e}");
        std::process::exit(1);
    });

    let mut args = std::env::args().skip(1);
    let Some(destination) = args.next() else {
        eprintln!("Usage: journey-assistant <destination> [time]");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  journey-assistant \"Willy-Brandt-Platz\"");
        eprintln!("  journey-assistant \"Willy-Brandt-Platz\" 16:33");
        std::process::exit(2);
    };
    let time_slot = args.next();

    let intent = JourneyIntent::from_slots(destination, time_slot.as_deref());

    let client = RmvClient::new(RmvConfig::new(config.home.api_key.clone()))
        .unwrap_or_else(|e| {
            eprintln!("Failed to create RMV client: {e}");
            std::process::exit(1);
        });
    let cached = CachedRmvClient::new(client, &StationCacheConfig::default());
    let finder = DepartureFinder::new(cached, config.home);

    match finder
        .find_next_departure(&intent.destination, intent.departure_time)
        .await
    {
        Ok(result) => println!("{}", respond::render_journey(&result, &config.response)),
        Err(e) => {
            tracing::warn!(error = %e, "journey lookup failed");
            println!("{}", respond::FAILURE_MESSAGE);
        }
    }
}
