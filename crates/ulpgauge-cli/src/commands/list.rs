use ulpgauge::precision::PrecisionKind;

use crate::registry::{entries, Lane};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let all = entries();
    println!("{:<10} {:<11} {:<15} {:<8} zero-sign", "name", "shape", "category", "max-ulp");
    for entry in &all {
        let shape = match entry.lane(PrecisionKind::Double) {
            Some(Lane::Double(routine)) => routine.shape().to_string(),
            _ => match entry.lane(PrecisionKind::Single) {
                Some(Lane::Single(routine)) => routine.shape().to_string(),
                _ => "-".to_string(),
            },
        };
        let tolerance = entry.tolerance();
        println!(
            "{:<10} {:<11} {:<15} {:<8} {:?}",
            entry.name,
            shape,
            format!("{:?}", entry.category).to_lowercase(),
            tolerance.max_ulp,
            tolerance.zero_sign
        );
    }
    println!("\n{} routine(s) registered", all.len());
    Ok(())
}
