#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        if let Some(page) = billboard::PageName::parse(name, "adoc") {
            assert!(page.number().bytes().all(|b| b.is_ascii_digit()));
            assert_eq!(page.file_name(), name);
        }
    }
});
