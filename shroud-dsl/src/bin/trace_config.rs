/// Configuration Tracer - Shows the configuration parsed from the arguments
///
/// Usage: cargo run --bin trace_config -- <configuration words...>
///
/// Example:
///   cargo run --bin trace_config -- -injars in.jar -keep public class com.example.Main
///   RUST_LOG=shroud_dsl=trace cargo run --bin trace_config -- @app.pro
use shroud_core::{Configuration, ParserSettings};
use shroud_dsl::{pretty_print_with_separator, ConfigurationParser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shroud_dsl=info"));
    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        eprintln!("Failed to init subscriber: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: cargo run --bin trace_config -- <configuration words...>");
        std::process::exit(1);
    }

    let settings = ParserSettings::from_env();
    tracing::info!(
        max_include_depth = settings.max_include_depth,
        path_separator = %settings.path_separator,
        "Parsing {} argument(s)",
        args.len()
    );

    let mut config = Configuration::default();
    let result = ConfigurationParser::from_args(args, &settings)
        .and_then(|mut parser| parser.parse(&mut config));
    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize configuration: {}", e);
            std::process::exit(1);
        }
    }

    println!();
    print!("{}", pretty_print_with_separator(&config, settings.path_separator));
}
