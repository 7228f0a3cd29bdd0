use folio_db_jsonfile::{Connections as StorePool, DbReadOnly, DbReadWrite};
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};
use std::ops::Deref;

// Wrapper to be able to implement `FromRequest`
#[derive(Clone)]
pub struct Connections(StorePool);

impl Connections {
    pub fn shared(&self) -> DbReadOnly<'_> {
        self.0.shared()
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        self.0.exclusive()
    }
}

impl From<StorePool> for Connections {
    fn from(pool: StorePool) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = StorePool;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(connections.inner().clone())
    }
}
