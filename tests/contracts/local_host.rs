//! The disk-backed host honours the same contracts as the in-memory one.

use armory::application::find_records;
use armory::domain::ports::{ArtifactIndex, ContainerOracle};
use armory::{is_name_available, LocalAssetDatabase, PathMaterializer, RecordKind};

use crate::common::*;

#[test]
fn contract_local_ensure_is_idempotent() {
    let env = TestEnv::builder().initialized().build();
    let db = LocalAssetDatabase::new(env.project_root.path());
    let materializer = PathMaterializer::new(&db);

    let first = materializer.ensure_path("Assets/Prefabs/Rifle").unwrap();
    let second = materializer.ensure_path("Assets/Prefabs/Rifle").unwrap();

    assert_eq!(first.created, vec!["Assets/Prefabs", "Assets/Prefabs/Rifle"]);
    assert!(second.is_noop());
    assert!(env.project_path("Assets/Prefabs/Rifle").is_dir());
}

#[test]
fn contract_local_unique_path_skips_existing_files() {
    let env = TestEnv::builder()
        .initialized()
        .with_file("Assets/dir/gun.mat", "")
        .with_file("Assets/dir/gun 1.mat", "")
        .build();
    let db = LocalAssetDatabase::new(env.project_root.path());

    let path = PathMaterializer::new(&db)
        .resolve_unique_asset_path("Assets/dir", "gun", "mat")
        .unwrap();

    assert_eq!(path.to_string(), "Assets/dir/gun 2.mat");
    assert!(!db.artifact_exists(&path.to_string()));
}

#[test]
fn contract_local_records_feed_name_checks() {
    let env = TestEnv::builder()
        .initialized()
        .with_file("Assets/Prefabs/Rifle/Rifle.asset", &weapon_record("Rifle"))
        .with_file("Assets/Prefabs/Rifle/Rifle.prefab", &prefab_record("Rifle"))
        .build();
    let db = LocalAssetDatabase::new(env.project_root.path());

    let weapons = find_records(&db, RecordKind::WeaponData).unwrap();

    assert_eq!(weapons.len(), 1);
    assert!(!is_name_available("Rifle", &weapons));
    assert!(is_name_available("Pistol", &weapons));
    assert!(db.container_exists("Assets/Prefabs/Rifle"));
}

/// CONTRACT: every record on disk counts toward name uniqueness
mod listing_sees_every_record {
    use super::*;
    use armory::domain::ports::NoopEventSink;
    use armory::{ArmoryError, WeaponWizard, WizardError, WizardSettings};

    fn wizard_create(db: &LocalAssetDatabase, name: &str) -> Result<(), ArmoryError> {
        let sink = NoopEventSink;
        let mut wizard = WeaponWizard::new(db, WizardSettings::default(), &sink);
        wizard.create_weapon(name).map(|_| ())
    }

    #[test]
    fn contract_dot_prefixed_weapon_is_not_duplicated() {
        let env = TestEnv::builder().initialized().build();
        let db = LocalAssetDatabase::new(env.project_root.path()).with_asset_root("Assets");

        wizard_create(&db, ".Rifle").unwrap();
        let original = env.read_project_file("Assets/Prefabs/.Rifle/.Rifle.asset");
        let err = wizard_create(&db, ".Rifle").unwrap_err();

        assert!(
            matches!(err, ArmoryError::Wizard(WizardError::NameTaken(ref name)) if name == ".Rifle"),
            "unexpected result: {:?}",
            err
        );
        assert_eq!(find_records(&db, RecordKind::WeaponData).unwrap().len(), 1);
        assert_eq!(
            env.read_project_file("Assets/Prefabs/.Rifle/.Rifle.asset"),
            original
        );
        assert!(!env.project_path("Assets/Prefabs/.Rifle/.Rifle 1.prefab").exists());
    }

    #[test]
    fn contract_ignore_file_does_not_hide_records() {
        let env = TestEnv::builder()
            .initialized()
            .with_file(".ignore", "Prefabs/\n")
            .build();
        let db = LocalAssetDatabase::new(env.project_root.path()).with_asset_root("Assets");

        wizard_create(&db, "Rifle").unwrap();

        let weapons = find_records(&db, RecordKind::WeaponData).unwrap();
        assert_eq!(weapons.len(), 1, "records: {:?}", weapons);
        assert!(wizard_create(&db, "Rifle").is_err());
    }

    #[test]
    fn contract_records_outside_asset_root_do_not_block_names() {
        let env = TestEnv::builder()
            .initialized()
            .with_file("target/Rifle.asset", &weapon_record("Rifle"))
            .build();
        let db = LocalAssetDatabase::new(env.project_root.path()).with_asset_root("Assets");

        let weapons = find_records(&db, RecordKind::WeaponData).unwrap();

        assert!(weapons.is_empty(), "records: {:?}", weapons);
        assert!(is_name_available("Rifle", &weapons));
    }
}
