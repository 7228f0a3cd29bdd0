use std::{net::IpAddr, sync::Arc};

use rocket::{config::Config as RocketCfg, Build, Rocket, Route};

use folio_core::gateways::chat::ChatGateway;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod store;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub enable_cors: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    chat: Arc<dyn ChatGateway + Send + Sync>,
}

pub(crate) struct Connections {
    db: store::Connections,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: Connections,
    gateways: Gateways,
) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Connections { db } = connections;
    let Gateways { chat } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let chat_gw = guards::Chat(chat);
    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(chat_gw).manage(version);

    if cfg.enable_cors {
        info!("Allowing requests from any origin");
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .expect("CORS configuration");
        instance = instance.attach(cors);
    }

    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }

    info!("Initialization finished");
    instance
}

#[cfg(not(feature = "frontend"))]
pub(crate) fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
pub(crate) fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub fn run(
    connections: folio_db_jsonfile::Connections,
    chat_gateway: Arc<dyn ChatGateway + Send + Sync>,
    bind_address: IpAddr,
    port: u16,
    cfg: Cfg,
    version: &'static str,
) {
    let mut rocket_cfg = RocketCfg::release_default();
    rocket_cfg.address = bind_address;
    rocket_cfg.port = port;

    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version,
    };
    let connections = Connections {
        db: connections.into(),
    };
    let gateways = Gateways { chat: chat_gateway };
    let instance = rocket_instance(options, connections, gateways);

    if let Err(err) = rocket::execute(instance.launch()) {
        error!("Failed to launch the web server: {err}");
    }
}
