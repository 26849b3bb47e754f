//! Container materialization contracts
//!
//! `ensure_path` creates missing segments parent first, never creates the
//! root, and rejects malformed paths before touching the host.

use std::cell::RefCell;

use armory::domain::ports::{ContainerCreator, ContainerOracle, CreationError};
use armory::infrastructure::memory::Operation;
use armory::{InMemoryAssetDatabase, InvalidPathError, MaterializeError, PathMaterializer};

/// Host that records what the oracle said about the parent at creation time
/// and can refuse one container.
struct ObservingHost {
    inner: InMemoryAssetDatabase,
    refuse: Option<String>,
    parent_seen: RefCell<Vec<(String, bool)>>,
}

impl ObservingHost {
    fn new(refuse: Option<&str>) -> Self {
        Self {
            inner: InMemoryAssetDatabase::with_root("a"),
            refuse: refuse.map(str::to_string),
            parent_seen: RefCell::new(Vec::new()),
        }
    }
}

impl ContainerOracle for ObservingHost {
    fn container_exists(&self, path: &str) -> bool {
        self.inner.container_exists(path)
    }
}

impl ContainerCreator for ObservingHost {
    fn create_container(&self, parent: &str, name: &str) -> Result<(), CreationError> {
        let path = format!("{}/{}", parent, name);
        self.parent_seen
            .borrow_mut()
            .push((path.clone(), self.inner.container_exists(parent)));
        if self.refuse.as_deref() == Some(path.as_str()) {
            return Err(CreationError::Host {
                path,
                message: "read-only".to_string(),
            });
        }
        self.inner.create_container(parent, name)
    }
}

/// CONTRACT: a second ensure over the same path creates nothing
mod idempotence {
    use super::*;

    #[test]
    fn contract_second_ensure_is_noop() {
        let db = InMemoryAssetDatabase::with_root("Assets");
        let materializer = PathMaterializer::new(&db);

        let first = materializer.ensure_path("Assets/Prefabs/Rifle").unwrap();
        let containers_after_first = db.containers();
        let second = materializer.ensure_path("Assets/Prefabs/Rifle").unwrap();

        assert_eq!(first.created.len(), 2);
        assert!(second.is_noop(), "second pass created {:?}", second.created);
        assert_eq!(db.containers(), containers_after_first);
        assert_eq!(db.creation_count(), 2);
    }

    #[test]
    fn contract_overlapping_prefix_only_creates_the_tail() {
        let db = InMemoryAssetDatabase::with_root("Assets");
        let materializer = PathMaterializer::new(&db);

        materializer.ensure_path("Assets/Prefabs").unwrap();
        let report = materializer.ensure_path("Assets/Prefabs/Rifle/Skins").unwrap();

        assert_eq!(
            report.created,
            vec!["Assets/Prefabs/Rifle", "Assets/Prefabs/Rifle/Skins"]
        );
    }
}

/// CONTRACT: a parent exists before any child is created in it
mod prefix_ordering {
    use super::*;

    #[test]
    fn contract_parent_exists_when_child_is_created() {
        let host = ObservingHost::new(None);

        PathMaterializer::new(&host).ensure_path("a/b/c").unwrap();

        let seen = host.parent_seen.borrow();
        assert_eq!(
            *seen,
            vec![("a/b".to_string(), true), ("a/b/c".to_string(), true)]
        );
    }

    #[test]
    fn contract_creation_log_is_parent_first() {
        let db = InMemoryAssetDatabase::with_root("a");

        PathMaterializer::new(&db).ensure_path("a/b/c/d").unwrap();

        assert_eq!(
            db.operations(),
            vec![
                Operation::CreateContainer {
                    parent: "a".to_string(),
                    name: "b".to_string()
                },
                Operation::CreateContainer {
                    parent: "a/b".to_string(),
                    name: "c".to_string()
                },
                Operation::CreateContainer {
                    parent: "a/b/c".to_string(),
                    name: "d".to_string()
                },
            ]
        );
    }
}

/// CONTRACT: root-only paths never reach the host's creator
mod root_only {
    use super::*;

    #[test]
    fn contract_root_only_path_performs_no_creation() {
        let db = InMemoryAssetDatabase::with_root("a");

        let report = PathMaterializer::new(&db).ensure_path("a").unwrap();

        assert!(report.is_noop());
        assert!(db.operations().is_empty());
    }

    #[test]
    fn contract_missing_root_is_not_created() {
        let db = InMemoryAssetDatabase::new();

        let report = PathMaterializer::new(&db).ensure_path("a").unwrap();

        assert!(report.is_noop());
        assert!(db.containers().is_empty());
    }
}

/// CONTRACT: malformed paths fail with InvalidPathError and create nothing
mod invalid_paths {
    use super::*;

    #[test]
    fn contract_empty_path_is_rejected() {
        let db = InMemoryAssetDatabase::with_root("a");

        let err = PathMaterializer::new(&db).ensure_path("").unwrap_err();

        assert_eq!(err, MaterializeError::InvalidPath(InvalidPathError::Empty));
        assert!(db.operations().is_empty());
    }

    #[test]
    fn contract_empty_root_is_rejected() {
        let db = InMemoryAssetDatabase::with_root("a");

        let err = PathMaterializer::new(&db).ensure_path("/b/c").unwrap_err();

        assert!(
            matches!(
                err,
                MaterializeError::InvalidPath(InvalidPathError::EmptyRoot { .. })
            ),
            "unexpected error: {:?}",
            err
        );
        assert!(db.operations().is_empty());
    }

    #[test]
    fn contract_traversal_segment_is_rejected_before_creation() {
        let db = InMemoryAssetDatabase::with_root("a");

        let err = PathMaterializer::new(&db).ensure_path("a/b/../c").unwrap_err();

        assert!(matches!(err, MaterializeError::InvalidPath(_)));
        assert!(db.operations().is_empty());
    }
}

/// CONTRACT: a refused segment stops the pass; earlier segments stay created
mod partial_failure {
    use super::*;

    #[test]
    fn contract_failure_names_segment_and_keeps_prefix() {
        let host = ObservingHost::new(Some("a/b/c"));

        let err = PathMaterializer::new(&host)
            .ensure_path("a/b/c/d")
            .unwrap_err();

        match &err {
            MaterializeError::Creation { segment, path, .. } => {
                assert_eq!(segment, "c");
                assert_eq!(path, "a/b/c");
            }
            other => panic!("expected creation error, got {:?}", other),
        }
        assert!(err.to_string().contains("'c'"), "message: {}", err);
        assert!(host.inner.container_exists("a/b"));
        assert!(!host.inner.container_exists("a/b/c/d"));
        assert_eq!(host.parent_seen.borrow().len(), 2);
    }
}
