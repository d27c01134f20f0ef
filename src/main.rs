use clap::Parser;
use datetag::application::{ConfigService, GenerateTagService};
use datetag::cli::{format_config, Cli, Commands, TaggerArgs};
use datetag::error::TagError;
use datetag::infrastructure::TaggerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(args: TaggerArgs) -> Result<(std::path::PathBuf, TaggerConfig), TagError> {
    let config = TaggerConfig::load(&args.context, args.format, args.timezone)?;
    Ok((args.context, config))
}

fn run(cli: Cli) -> Result<(), TagError> {
    match cli.command {
        Commands::Tag { image, tagger } => {
            let (context, config) = load_config(tagger)?;
            let service = GenerateTagService::from_config(&config);
            let tag = service.execute(&context, &image)?;
            println!("{}", tag);
            Ok(())
        }
        Commands::Config { tagger } => {
            let (_, config) = load_config(tagger)?;
            let effective = ConfigService::new(config).effective()?;
            print!("{}", format_config(&effective));
            Ok(())
        }
    }
}
