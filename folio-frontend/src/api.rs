pub use folio_frontend_api::{Error, PublicApi};
