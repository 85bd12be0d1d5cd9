use clap::{Args, Parser, Subcommand};
use pokeapi_client::{
    AsciiOptions, Config, DEFAULT_PAGE_LIMIT, PokeApiClient, PokeApiError, SpriteRequest,
    fetch_ascii_sprite, summary,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MAX_POKEMON_ID: u32 = 1025;

#[derive(Parser, Debug)]
#[command(name = "pokeapi-client", version, about = "Browse the PokéAPI catalog from the terminal")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one Pokémon by name or id
    Show {
        identifier: String,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Show a random Pokémon
    Random {
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// List Pokémon page by page
    List {
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Use the shiny sprite
    #[arg(long)]
    shiny: bool,
    /// Use the back sprite
    #[arg(long)]
    back: bool,
    /// Sprite width in columns (defaults to the configured width)
    #[arg(long)]
    width: Option<u32>,
    /// Disable ANSI colors in the sprite
    #[arg(long)]
    no_color: bool,
    /// Print the decoded record as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match PokeApiClient::from_config(&config.pokemon) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Show {
            identifier,
            display,
        } => show(&client, &config, &identifier.to_lowercase(), &display).await,
        Command::Random { display } => {
            let id: u32 = rand::random_range(1..=MAX_POKEMON_ID);
            tracing::debug!("Picked random Pokémon ID: {}", id);
            show(&client, &config, &id.to_string(), &display).await
        }
        Command::List { limit, offset } => list(&client, limit, offset).await,
    };

    if let Err(e) = result {
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}

fn failure_message(error: &PokeApiError) -> String {
    if error.is_not_found() {
        format!("No such Pokémon. {}", error)
    } else {
        error.to_string()
    }
}

async fn show(
    client: &PokeApiClient,
    config: &Config,
    identifier: &str,
    display: &DisplayArgs,
) -> Result<(), PokeApiError> {
    let pokemon = client.get_pokemon(identifier).await?;

    if display.json {
        println!("{}", serde_json::to_string_pretty(&pokemon)?);
        return Ok(());
    }

    let request = SpriteRequest {
        shiny: display.shiny,
        back: display.back,
        ascii: AsciiOptions {
            width: display.width.unwrap_or(config.display.sprite_width),
            colored: config.display.colored && !display.no_color,
        },
    };

    // Sprite failures fall back to the text-only summary
    let sprite = match fetch_ascii_sprite(client, &pokemon, &request).await {
        Ok(sprite) => sprite,
        Err(e) => {
            tracing::warn!("Failed to render sprite: {}", e);
            None
        }
    };

    println!("{}", summary(&pokemon, sprite.as_deref()));
    Ok(())
}

async fn list(client: &PokeApiClient, limit: u32, offset: u32) -> Result<(), PokeApiError> {
    let page = client.get_pokemon_list(limit, offset).await?;

    println!("Total count: {}", page.count);
    for stub in &page.results {
        println!("- {} (ID: {})", stub.name, stub.id);
    }
    if let Some(next) = &page.next {
        println!("Next page: {}", next);
    }
    Ok(())
}
