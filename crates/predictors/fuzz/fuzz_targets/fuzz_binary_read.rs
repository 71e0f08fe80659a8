//! Fuzz target for the binary archive reader.
//!
//! Arbitrary bytes must either decode or produce a `ReadError`; a decoded
//! predictor must re-encode to an archive that reads back identically.
//!
//! Run with:
//! ```sh
//! cargo +nightly fuzz run fuzz_binary_read
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

use predictors::persist::{Archivable, BinaryReadOptions, Predictor};

fuzz_target!(|data: &[u8]| {
    let unchecked = BinaryReadOptions::builder().verify_checksum(false).build();
    let Ok(predictor) = Predictor::read_from(data, &unchecked) else {
        return;
    };

    let bytes = predictor.to_bytes().expect("decoded predictor re-encodes");
    let again = Predictor::from_bytes(&bytes).expect("re-encoded archive decodes");
    assert_eq!(again.dimension(), predictor.dimension());
});
