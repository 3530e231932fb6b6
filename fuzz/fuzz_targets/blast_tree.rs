#![no_main]
use libfuzzer_sys::fuzz_target;
use blast_core::dummy_backend::{EchoHost, MemoryFs};
use blast_core::FontBlaster;
use std::path::Path;

// Each line is a relative path; its content is the path itself
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut fs = MemoryFs::new();
    for line in text.lines().take(64) {
        if line.is_empty() || line.contains("..") || line.starts_with('/') {
            continue;
        }
        fs.add_file(Path::new("/root").join(line), line.as_bytes());
    }

    let mut blaster = FontBlaster::new(fs, EchoHost::new());
    let first = blaster.blast(Path::new("/root"));
    let second = blaster.blast(Path::new("/root"));

    assert_eq!(first.len(), second.len());
    assert_eq!(blaster.host().registered().len(), blaster.loaded_fonts().len());
});
