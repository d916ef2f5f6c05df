use anyhow::Result;
use icsgen_core::EventProperty;

/// Print the VEVENT property emission order.
pub fn run() -> Result<()> {
    for (i, property) in EventProperty::ALL.iter().enumerate() {
        let kind = if property.is_multi() { "multi" } else { "single" };
        println!("{:>2}  {:<16} {}", i + 1, property.name(), kind);
    }
    Ok(())
}
