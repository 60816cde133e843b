use crate::calc::HOUR_RANGES;
use anyhow::Result;

pub fn run(json: bool) -> Result<()> {
    if json {
        write_slots_json(&mut std::io::stdout())
    } else {
        write_slots(&mut std::io::stdout())
    }
}

pub(crate) fn write_slots<W: std::io::Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Hour Slots")?;
    writeln!(out, "---")?;
    for (i, hour) in HOUR_RANGES.iter().enumerate() {
        writeln!(out, "  {:<4} {}", i + 1, hour)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} slot(s)", HOUR_RANGES.len())?;
    Ok(())
}

pub(crate) fn write_slots_json<W: std::io::Write>(out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &HOUR_RANGES)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_slots_lists_all_ranges() {
        let mut buf = Vec::new();
        write_slots(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("09AM - 10AM"));
        assert!(out.contains("4PM - 5PM"));
        assert!(out.contains("Total: 8 slot(s)"));
    }

    #[test]
    fn test_write_slots_numbers_rows() {
        let mut buf = Vec::new();
        write_slots(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("  1    09AM - 10AM"));
        assert!(out.contains("  8    4PM - 5PM"));
    }

    #[test]
    fn test_write_slots_json_parses_back() {
        let mut buf = Vec::new();
        write_slots_json(&mut buf).unwrap();
        let parsed: Vec<String> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.len(), 8);
        assert_eq!(parsed[0], "09AM - 10AM");
    }
}
