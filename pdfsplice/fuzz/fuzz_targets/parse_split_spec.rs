#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfsplice::split::SplitSpec;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");

    let Ok(spec) = s.parse::<SplitSpec>() else {
        return;
    };

    // Resolved spans must stay inside the document or be rejected.
    for total_pages in [0usize, 1, 7, 1000] {
        if let Ok(spans) = spec.spans(total_pages) {
            for span in spans {
                assert!(span.start <= span.end);
                assert!((span.end as usize) < total_pages);
            }
        }
    }
});
