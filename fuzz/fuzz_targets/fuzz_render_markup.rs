#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Rendering is total: any text must produce HTML without panicking
        let html = billboard::render(content);
        assert!(!html.contains("<script"));
    }
});
