use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use speech_properties::config::ConfigSet;
use speech_properties::{ConnectionParameters, PropertyCollection, PropertyId};

fn main() {
    init_tracing();

    // 引数あり: プロパティIDを正規名へ解決して表示
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        std::process::exit(resolve_args(&args));
    }

    match ConfigSet::load_from_env() {
        Ok(config) => {
            info!(root = ?config.root(), "configuration loaded");

            let properties = PropertyCollection::new();
            if let Err(err) = config.speech.apply_to(&properties) {
                error!(error = %err, "failed to apply configuration");
                std::process::exit(1);
            }
            info!(count = properties.len(), "properties populated");

            let params = match ConnectionParameters::from_properties(&properties) {
                Ok(params) => params,
                Err(err) => {
                    error!(error = %err, "failed to assemble connection parameters");
                    std::process::exit(1);
                }
            };
            info!(
                session_id = %params.session_id(),
                entries = params.len(),
                "connection parameters assembled"
            );

            match serde_json::to_string_pretty(&params.to_json()) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    error!(error = %err, "failed to serialize connection parameters");
                    std::process::exit(1);
                }
            }
        }
        Err(err) => {
            error!(error = ?err, "failed to load configuration");
            std::process::exit(1);
        }
    }
}

fn resolve_args(args: &[String]) -> i32 {
    let mut status = 0;
    for arg in args {
        let raw = match arg.parse::<i32>() {
            Ok(raw) => raw,
            Err(err) => {
                error!(arg = %arg, error = %err, "not an integer property id");
                status = 2;
                continue;
            }
        };
        match PropertyId::from_raw(raw).name() {
            Ok(name) => println!("{raw}\t{name}"),
            Err(_) => status = 1,
        }
    }
    status
}

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}
