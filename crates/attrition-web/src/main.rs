use anyhow::{Context, Result};
use clap::{Arg, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Arc;

use attrition_classifiers::models::factory;
use attrition_web::config::AppConfig;
use attrition_web::routes::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default()
                .filter_or("ATTRITION_LOG", "error,attrition_web=info,attrition_classifiers=info"),
        )
        .init();

    let matches = Command::new("attrition-web")
        .version(clap::crate_version!())
        .about("Employee attrition predictor - single-page prediction form")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .help(
                    "Path to the classifier artifact. Overrides the model path \
                     specified in the configuration file.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Address to bind. Overrides the configuration file."),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to bind. Overrides the configuration file.")
                .value_parser(clap::value_parser!(u16)),
        )
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(model_path) = matches.get_one::<PathBuf>("model") {
        config.model_path = model_path.clone();
    }
    if let Some(host) = matches.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }

    // Fatal if the artifact is missing or corrupt: there is no model to serve.
    let model = factory::load_model(&config.model_path)
        .with_context(|| format!("Failed to load classifier artifact: {:?}", config.model_path))?;
    log::info!(
        "Serving {} model over {} features",
        model.name(),
        model.n_features()
    );

    let app = routes::router(AppState {
        model: Arc::from(model),
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
