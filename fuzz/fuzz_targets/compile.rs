#![no_main]

use libfuzzer_sys::fuzz_target;
use pathcascade::selector::{compile, specificity};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    // Scoring never fails, even for text that does not compile.
    let score = specificity(raw);
    if let Ok(compiled) = compile(raw) {
        // The canonical form compiles to the same segments and filter.
        let again = compile(&compiled.to_string());
        if let Ok(again) = again {
            assert_eq!(again.segments(), compiled.segments());
            assert_eq!(again.filter(), compiled.filter());
            assert_eq!(specificity(&compiled.to_string()), score);
        }
    }
});
