//! Capture a stroke, print its canonical form as a template record, then
//! classify a second drawing against it.

use unistroke::io::{TemplateRecord, TemplateSet};
use unistroke::{Recognizer, RecognizerParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    unistroke::core::init_with_level(log::LevelFilter::Debug)?;

    let mut rec = Recognizer::new(RecognizerParams::default())?;

    // A hand-drawn "L": down, then right.
    for i in 0..=20 {
        rec.add_point(100.0, 100.0 + 5.0 * i as f64);
    }
    for i in 1..=12 {
        rec.add_point(100.0 + 5.0 * i as f64, 200.0);
    }
    let ell = rec.serialize()?;

    let mut set = TemplateSet::new(rec.params().resample_count);
    set.upsert(TemplateRecord::from_stroke("ell", &ell));
    println!("{}", serde_json::to_string_pretty(&set)?);

    rec.add_normalized("ell", ell)?;
    for i in 0..=10 {
        rec.add_point(-4.0, 3.0 * i as f64);
    }
    for i in 1..=6 {
        rec.add_point(-4.0 + 3.0 * i as f64, 30.0);
    }
    let result = rec.classify()?;
    println!("{} score={:.3}", result.name, result.score);
    Ok(())
}
