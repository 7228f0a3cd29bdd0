use std::sync::Arc;

use rocket::{config::Config as RocketCfg, local::blocking::Client};

use folio_core::gateways::chat::{ChatGateway, ChatGatewayError};

use super::{api, rocket_instance, store, Cfg, Connections, Gateways, InstanceOptions};

pub mod prelude {
    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{setup, setup_with_chat_gw, BrokenChatGW, DummyChatGW, TestFixture};
}

pub struct DummyChatGW;

impl ChatGateway for DummyChatGW {
    fn send_message(&self, message: &str) -> Result<String, ChatGatewayError> {
        Ok(format!("echo: {message}"))
    }
}

/// Simulates an upstream chat backend that responds with HTTP 500.
pub struct BrokenChatGW;

impl ChatGateway for BrokenChatGW {
    fn send_message(&self, _: &str) -> Result<String, ChatGatewayError> {
        Err(ChatGatewayError::ErrorStatus(500))
    }
}

pub struct TestFixture {
    pub client: Client,
    pub db: store::Connections,
    db_dir: Option<tempfile::TempDir>,
}

impl TestFixture {
    /// Removes the store directory while the server keeps running.
    pub fn drop_store_directory(&mut self) {
        self.db_dir = None;
    }
}

pub fn setup() -> TestFixture {
    setup_with_chat_gw(Arc::new(DummyChatGW))
}

pub fn setup_with_chat_gw(chat: Arc<dyn ChatGateway + Send + Sync>) -> TestFixture {
    let db_dir = tempfile::tempdir().unwrap();
    let connections = folio_db_jsonfile::Connections::init(db_dir.path()).unwrap();
    let db = store::Connections::from(connections);

    let options = InstanceOptions {
        mounts: vec![("/", api::routes())],
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg: Cfg { enable_cors: false },
        version: prelude::DUMMY_VERSION,
    };
    let connections = Connections { db: db.clone() };
    let gateways = Gateways { chat };

    let rocket = rocket_instance(options, connections, gateways);
    let client = Client::tracked(rocket).unwrap();
    TestFixture {
        client,
        db,
        db_dir: Some(db_dir),
    }
}
