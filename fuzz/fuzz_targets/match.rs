#![no_main]

use libfuzzer_sys::fuzz_target;
use pathcascade::{PathMatcher, Pattern};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // First line is the pattern, second the path, third the capabilities.
    let mut lines = text.lines();
    let (Some(pattern), Some(path)) = (lines.next(), lines.next()) else {
        return;
    };
    let caps: Vec<&str> = lines.next().unwrap_or("").split(',').collect();

    let matcher = PathMatcher::default();
    let pattern = Pattern::from(pattern);
    let Ok(hit) = matcher.is_match(&pattern, path, &caps.as_slice()) else {
        return;
    };

    // Malformed paths never match.
    if !path.is_empty() && path.split('.').any(str::is_empty) {
        assert!(!hit);
    }
    // Cached and fresh compilations agree.
    assert_eq!(
        PathMatcher::default().is_match(&pattern, path, &caps.as_slice()),
        Ok(hit)
    );
});
