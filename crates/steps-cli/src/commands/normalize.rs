//! Normalize command implementation.

use anyhow::Result;
use steps_core::{Chart, Difficulty, Layout};

/// Run the normalize command
pub fn run(difficulty: Difficulty, meter: i32, description: &str) -> Result<()> {
    let mut chart = Chart::new(Layout::default());
    chart.set_difficulty(difficulty);
    chart.set_meter(meter);
    chart.set_description(description);
    chart.normalize();

    println!("Difficulty:  {}", chart.difficulty());
    println!("Meter:       {}", chart.meter());
    println!("Description: {}", chart.description());
    Ok(())
}
