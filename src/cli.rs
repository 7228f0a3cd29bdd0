use std::{env, net::IpAddr, path::PathBuf, process, sync::Arc};

use clap::Parser;
use dotenvy::dotenv;

use folio_gateways::chat::HttpChatGateway;
use folio_webserver::web;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Personal portfolio web server")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Directory of the JSON comment store
    #[arg(long, value_name = "DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Address to bind the web server to
    #[arg(long, value_name = "ADDRESS")]
    address: Option<IpAddr>,

    /// Port to bind the web server to
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// URL of the chat-reply backend
    #[arg(long, value_name = "CHAT_API_URL")]
    chat_api_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

// Precedence: command line argument > environment variable > config file.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Ok(data_dir) = env::var("DATA_DIR") {
        config.data_dir = data_dir.into();
    }
    if let Ok(chat_api_url) = env::var("CHAT_API_URL") {
        config.chat.api_url = chat_api_url;
    }
    if let Some(ref data_dir) = args.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(address) = args.address {
        config.web.address = address;
    }
    if let Some(port) = args.port {
        config.web.port = port;
    }
    if let Some(ref chat_api_url) = args.chat_api_url {
        config.chat.api_url = chat_api_url.clone();
    }
    if args.enable_cors {
        config.web.enable_cors = true;
    }
}

pub fn run() {
    dotenv().ok();
    let args = Args::parse();

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            process::exit(1);
        }
    };
    apply_overrides(&mut config, &args);

    info!(
        "Opening the JSON comment store in '{}'",
        config.data_dir.display()
    );
    let connections = folio_db_jsonfile::Connections::init(&config.data_dir).unwrap();

    info!("Relaying chat messages to {}", config.chat.api_url);
    let chat_gateway =
        HttpChatGateway::new(config.chat.api_url.clone(), config.chat.timeout).unwrap();

    info!(
        "Starting the web server on {}:{}",
        config.web.address, config.web.port
    );
    web::run(
        connections,
        Arc::new(chat_gateway),
        config.web.address,
        config.web.port,
        web::Cfg {
            enable_cors: config.web.enable_cors,
        },
        env!("CARGO_PKG_VERSION"),
    );
}
