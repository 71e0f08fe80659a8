//! Score sparse feature vectors, inspect contributions, and persist.
//!
//! Run with: `cargo run --example score_and_save`

use predictors::data::{AutoDataVector, SparseVector};
use predictors::persist::{Archivable, JsonWriteOptions, Predictor};
use predictors::repr::LinearPredictor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut predictor = LinearPredictor::from_parts(vec![0.8, -0.4, 0.0, 1.5], 0.1);

    let x = SparseVector::from_pairs([(0, 1.0), (3, 2.0), (9, 5.0)])?;
    println!("score = {}", predictor.predict(&x));

    for e in predictor.weighted_elements(&x).iter() {
        println!("  feature {:>2}: {:+.3}", e.index, e.value);
    }

    let dense = AutoDataVector::from_dense(&[1.0, 1.0, 0.0, 1.0]);
    println!("auto-encoded as {:?}, score = {}", dense.kind(), predictor.predict(&dense));

    predictor.scale(0.5);
    let json = predictor.to_json_string(&JsonWriteOptions::pretty())?;
    println!("{json}");

    let restored = Predictor::from_json_str(&json)?;
    println!("restored {} with {} weights", restored.type_name(), restored.dimension());
    Ok(())
}
