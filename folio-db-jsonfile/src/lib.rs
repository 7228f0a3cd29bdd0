//! Comment store binding backed by a JSON document store.
//!
//! Every comment is kept as a single JSON document keyed by the comment
//! id, so a write is an independent single-document append.

use std::{path::Path, sync::Arc};

use anyhow::Result as Fallible;
use jfs::Store;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

mod models;
mod repo_impl;

type SharedStore = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct Connections {
    store: SharedStore,
}

impl Connections {
    pub fn init<P: AsRef<Path>>(path: P) -> Fallible<Self> {
        let store = Store::new(path).inspect_err(|err| {
            log::error!("Failed to open the JSON comment store: {err}");
        })?;
        Ok(Self {
            store: Arc::new(RwLock::new(store)),
        })
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly {
            store: self.store.read(),
        }
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite {
            store: self.store.write(),
        }
    }
}

pub struct DbReadOnly<'a> {
    store: RwLockReadGuard<'a, Store>,
}

pub struct DbReadWrite<'a> {
    store: RwLockWriteGuard<'a, Store>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{entities::*, repositories::CommentRepository as _};

    fn new_comment(id: &str, rating: Option<u8>) -> Comment {
        Comment {
            id: id.into(),
            created_at: Timestamp::from_millis(1_700_000_000_123),
            name: "Ann".into(),
            email: EmailAddress::new_unchecked("ann@x.com".into()),
            message: "hi".into(),
            rating: rating.map(RatingValue::new),
        }
    }

    #[test]
    fn create_and_load_comments() {
        let dir = tempfile::tempdir().unwrap();
        let connections = Connections::init(dir.path()).unwrap();
        connections
            .exclusive()
            .create_comment(new_comment("a", Some(4)))
            .unwrap();
        connections
            .exclusive()
            .create_comment(new_comment("b", None))
            .unwrap();

        let db = connections.shared();
        assert_eq!(db.count_comments().unwrap(), 2);
        let mut comments = db.all_comments().unwrap();
        comments.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(comments[0], new_comment("a", Some(4)));
        assert_eq!(comments[1], new_comment("b", None));
    }

    #[test]
    fn reject_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let connections = Connections::init(dir.path()).unwrap();
        let db = connections.exclusive();
        db.create_comment(new_comment("a", Some(4))).unwrap();
        assert!(db.create_comment(new_comment("a", Some(5))).is_err());
        assert_eq!(db.count_comments().unwrap(), 1);
    }

    #[test]
    fn loading_fails_without_store_directory() {
        let dir = tempfile::tempdir().unwrap();
        let connections = Connections::init(dir.path()).unwrap();
        drop(dir);
        assert!(connections.shared().all_comments().is_err());
    }
}
