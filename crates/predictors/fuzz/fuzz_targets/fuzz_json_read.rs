//! Fuzz target for the JSON record reader.
//!
//! Run with:
//! ```sh
//! cargo +nightly fuzz run fuzz_json_read
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

use predictors::persist::{Archivable, JsonWriteOptions, Predictor};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(predictor) = Predictor::from_json_str(text) else {
        return;
    };

    // Parsed JSON numbers are always finite, so writing back cannot fail.
    let json = predictor
        .to_json_string(&JsonWriteOptions::compact())
        .expect("parsed predictor re-encodes");
    let again = Predictor::from_json_str(&json).expect("re-encoded record decodes");
    assert_eq!(again, predictor);
});
