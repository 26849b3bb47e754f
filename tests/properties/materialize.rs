//! Property tests for materialization against the in-memory host.

use proptest::prelude::*;

use armory::domain::ports::ContainerOracle;
use armory::{InMemoryAssetDatabase, PathMaterializer};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-c]{1,2}").unwrap()
}

fn relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ensuring twice leaves the namespace as ensuring once.
    #[test]
    fn property_ensure_is_idempotent(rest in relative_path()) {
        let db = InMemoryAssetDatabase::with_root("root");
        let path = format!("root/{}", rest);
        let materializer = PathMaterializer::new(&db);

        materializer.ensure_path(&path).unwrap();
        let after_first = db.containers();
        let second = materializer.ensure_path(&path).unwrap();

        prop_assert!(second.is_noop());
        prop_assert_eq!(db.containers(), after_first);
        prop_assert!(db.container_exists(&path));
    }

    /// PROPERTY: a batch of overlapping paths creates each container once.
    #[test]
    fn property_overlapping_paths_create_each_container_once(
        paths in proptest::collection::vec(relative_path(), 1..8)
    ) {
        let db = InMemoryAssetDatabase::with_root("root");
        let materializer = PathMaterializer::new(&db);

        for rest in &paths {
            materializer.ensure_path(&format!("root/{}", rest)).unwrap();
        }

        // Every container except the root came from exactly one creation.
        prop_assert_eq!(db.creation_count(), db.containers().len() - 1);
    }

    /// PROPERTY: the resolved path never names an existing artifact.
    #[test]
    fn property_resolved_path_is_free(
        taken in proptest::collection::btree_set(0u32..6, 0..6),
        base_taken in any::<bool>(),
    ) {
        let db = InMemoryAssetDatabase::with_root("root");
        PathMaterializer::new(&db).ensure_path("root/dir").unwrap();
        if base_taken {
            db.seed_artifact("root/dir/gun.mat", "");
        }
        for k in taken.iter().filter(|k| **k > 0) {
            db.seed_artifact(&format!("root/dir/gun {}.mat", k), "");
        }

        let path = PathMaterializer::new(&db)
            .resolve_unique_asset_path("root/dir", "gun", "mat")
            .unwrap()
            .to_string();

        prop_assert!(db.artifact(&path).is_none());
        if !base_taken {
            prop_assert_eq!(path, "root/dir/gun.mat");
        } else {
            let smallest_free = (1u32..).find(|k| !taken.contains(k)).unwrap();
            prop_assert_eq!(path, format!("root/dir/gun {}.mat", smallest_free));
        }
    }
}
