use crate::calc::UNAVAILABLE_SLOTS;
use anyhow::Result;

pub fn run(json: bool) -> Result<()> {
    if json {
        write_unavailable_json(&mut std::io::stdout())
    } else {
        write_unavailable(&mut std::io::stdout())
    }
}

pub(crate) fn write_unavailable<W: std::io::Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Unavailable Slots")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<6} {}", "Day", "Hours")?;
    for slot in UNAVAILABLE_SLOTS {
        let (day, hours) = slot.split_once('-').unwrap_or(("?", slot));
        writeln!(out, "  {:<6} {}", day, hours)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} slot(s)", UNAVAILABLE_SLOTS.len())?;
    Ok(())
}

pub(crate) fn write_unavailable_json<W: std::io::Write>(out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &UNAVAILABLE_SLOTS)?;
    writeln!(out)?;
    Ok(())
}
