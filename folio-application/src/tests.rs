use super::*;

use crate::prelude as flows;
use folio_core::repositories::CommentRepository as _;

pub struct BackendFixture {
    pub db_connections: store::Connections,
    // Removing the directory drops the store.
    db_dir: Option<tempfile::TempDir>,
}

impl BackendFixture {
    pub fn new() -> Self {
        let db_dir = tempfile::tempdir().unwrap();
        let db_connections = store::Connections::init(db_dir.path()).unwrap();
        Self {
            db_connections,
            db_dir: Some(db_dir),
        }
    }

    pub fn drop_store_directory(&mut self) {
        self.db_dir = None;
    }
}

fn default_new_comment() -> usecases::NewComment {
    usecases::NewComment {
        name: "Ann".into(),
        email: "ann@x.com".into(),
        message: "hi".into(),
        rating: 4,
    }
}

#[test]
fn add_and_list_round_trip() {
    let fixture = BackendFixture::new();
    let id = flows::add_comment(&fixture.db_connections, default_new_comment()).unwrap();

    let listing = flows::load_comments(&fixture.db_connections).unwrap();
    assert_eq!(listing.comments.len(), 1);
    let comment = &listing.comments[0];
    assert_eq!(comment.id, id);
    assert_eq!(comment.name, "Ann");
    assert_eq!(comment.email.as_str(), "ann@x.com");
    assert_eq!(comment.message, "hi");
    assert_eq!(comment.rating.map(u8::from), Some(4));
    assert_eq!(listing.avg_rating, 4.0.into());
}

#[test]
fn listing_reflects_every_awaited_submission() {
    let fixture = BackendFixture::new();
    for (rating, name) in [(4, "Ann"), (5, "Ben"), (1, "Eva")] {
        flows::add_comment(
            &fixture.db_connections,
            usecases::NewComment {
                name: name.into(),
                rating,
                ..default_new_comment()
            },
        )
        .unwrap();
        let listing = flows::load_comments(&fixture.db_connections).unwrap();
        assert!(listing.comments.iter().any(|c| c.name == name));
    }
    let listing = flows::load_comments(&fixture.db_connections).unwrap();
    // (4 + 5 + 1) / 3 = 3.33…
    assert_eq!(listing.avg_rating, 3.3.into());
}

#[test]
fn listing_twice_is_idempotent() {
    let fixture = BackendFixture::new();
    flows::add_comment(&fixture.db_connections, default_new_comment()).unwrap();
    let first = flows::load_comments(&fixture.db_connections).unwrap();
    let second = flows::load_comments(&fixture.db_connections).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rejected_submission_is_not_stored() {
    let fixture = BackendFixture::new();
    let invalid = usecases::NewComment {
        rating: 0,
        ..default_new_comment()
    };
    assert!(flows::add_comment(&fixture.db_connections, invalid).is_err());
    assert_eq!(fixture.db_connections.shared().count_comments().unwrap(), 0);
}

#[test]
fn loading_fails_when_the_store_is_gone() {
    let mut fixture = BackendFixture::new();
    fixture.drop_store_directory();
    assert!(flows::load_comments(&fixture.db_connections).is_err());
}
