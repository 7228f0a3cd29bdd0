use std::sync::Arc;

use folio_core::gateways::chat::ChatGateway;

pub struct Chat(pub Arc<dyn ChatGateway + Send + Sync>);

pub struct Version(pub &'static str);
