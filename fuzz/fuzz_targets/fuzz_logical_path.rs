#![no_main]

use armory::{InMemoryAssetDatabase, LogicalPath, PathMaterializer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(path) = LogicalPath::parse(raw) {
            assert_eq!(path.to_string(), raw);

            // Materializing a parsed path under its own root never fails.
            let db = InMemoryAssetDatabase::with_root(path.root());
            let materializer = PathMaterializer::new(&db);
            let first = materializer.ensure(&path).expect("ensure");
            assert_eq!(first.created.len(), path.depth());
            assert!(materializer.ensure(&path).expect("ensure").is_noop());
        }
    }
});
