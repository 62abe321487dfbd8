use chrono::Timelike;

use mh_core::branch;

pub fn run(hour: Option<u32>) -> Result<(), String> {
    let hour = hour.unwrap_or_else(|| super::now().hour());
    let b = branch::resolve(hour);
    println!("  {hour:02}:00 → {b}");
    println!("  地支序：{}", b.index);
    Ok(())
}
