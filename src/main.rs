use clap::Parser;
use poststore::application::PostStore;
use poststore::cli::{format_json, format_summary_list, Cli, Commands};
use poststore::error::PostStoreError;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    init_logging(&cli);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(cli: &Cli) {
    // The parsed-document dump is an info event, so --dump has to lift the level.
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.dump {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), PostStoreError> {
    let config = cli.resolve_config()?;

    match cli.command {
        Commands::List { json } => {
            let store = PostStore::open(&config)?;
            let posts = store.list_all_sorted()?;

            if json {
                println!("{}", format_json(&posts)?);
            } else {
                println!("{}", format_summary_list(&posts).trim_end());
            }
            Ok(())
        }
        Commands::Ids => {
            let store = PostStore::open(&config)?;
            println!("{}", format_json(&store.list_all_ids()?)?);
            Ok(())
        }
        Commands::Show { id } => {
            let store = PostStore::open(&config)?;
            println!("{}", format_json(&store.get_by_id(&id)?)?);
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
