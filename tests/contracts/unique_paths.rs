//! Unique asset path contracts
//!
//! The resolved path never names an existing artifact, and the suffix is
//! the smallest free positive integer.

use armory::domain::ports::ContainerOracle;
use armory::{InMemoryAssetDatabase, PathMaterializer};

#[test]
fn contract_free_name_is_used_unchanged() {
    let db = InMemoryAssetDatabase::with_root("Assets");

    let path = PathMaterializer::new(&db)
        .resolve_unique_asset_path("Assets/dir", "gun", "mat")
        .unwrap();

    assert_eq!(path.to_string(), "Assets/dir/gun.mat");
}

#[test]
fn contract_skips_taken_suffixes() {
    let db = InMemoryAssetDatabase::with_root("Assets");
    PathMaterializer::new(&db).ensure_path("Assets/dir").unwrap();
    db.seed_artifact("Assets/dir/gun.mat", "");
    db.seed_artifact("Assets/dir/gun 1.mat", "");

    let path = PathMaterializer::new(&db)
        .resolve_unique_asset_path("Assets/dir", "gun", "mat")
        .unwrap();

    assert_eq!(path.to_string(), "Assets/dir/gun 2.mat");
}

#[test]
fn contract_fills_the_first_gap() {
    let db = InMemoryAssetDatabase::with_root("Assets");
    PathMaterializer::new(&db).ensure_path("Assets/dir").unwrap();
    db.seed_artifact("Assets/dir/gun.mat", "");
    db.seed_artifact("Assets/dir/gun 2.mat", "");

    let path = PathMaterializer::new(&db)
        .resolve_unique_asset_path("Assets/dir", "gun", "mat")
        .unwrap();

    assert_eq!(path.to_string(), "Assets/dir/gun 1.mat");
}

#[test]
fn contract_resolution_ensures_directory_first() {
    let db = InMemoryAssetDatabase::with_root("Assets");

    PathMaterializer::new(&db)
        .resolve_unique_asset_path("Assets/Prefabs/Rifle", "Rifle", "prefab")
        .unwrap();

    assert!(db.container_exists("Assets/Prefabs/Rifle"));
}

#[test]
fn contract_resolution_does_not_reserve() {
    let db = InMemoryAssetDatabase::with_root("Assets");
    let materializer = PathMaterializer::new(&db);

    let first = materializer
        .resolve_unique_asset_path("Assets", "gun", "mat")
        .unwrap();
    let second = materializer
        .resolve_unique_asset_path("Assets", "gun", "mat")
        .unwrap();

    assert_eq!(first, second);
    assert!(db.artifact("Assets/gun.mat").is_none());
}

#[test]
fn contract_invalid_name_has_no_side_effects() {
    let db = InMemoryAssetDatabase::with_root("Assets");

    let result =
        PathMaterializer::new(&db).resolve_unique_asset_path("Assets/New", "a/b", "mat");

    assert!(result.is_err());
    assert!(db.operations().is_empty());
}
