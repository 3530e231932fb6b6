#![no_main]
use libfuzzer_sys::fuzz_target;
use blast_core::classify;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    if let Some((stem, ext)) = classify(name) {
        assert!(!stem.is_empty());
        assert!(ext == "ttf" || ext == "otf");
        assert_eq!(format!("{stem}.{ext}"), name);
    }
});
