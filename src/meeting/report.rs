//! Plain-text report for extracted meeting info

use std::io::Write;

use crate::meeting::MeetingInfo;

/// Write the summary followed by one line per action item, in model order.
///
/// A missing deadline is printed as `None`.
pub fn write_report<W: Write>(out: &mut W, info: &MeetingInfo) -> std::io::Result<()> {
    writeln!(out, "--- Extracted Summary ---")?;
    writeln!(out, "{}", info.summary)?;
    writeln!(out)?;
    writeln!(out, "--- Extracted Action Items ---")?;

    for item in &info.action_items {
        writeln!(
            out,
            "- Task: {}, Owner: {}, Deadline: {}",
            item.task,
            item.owner,
            item.deadline.as_deref().unwrap_or("None")
        )?;
    }

    Ok(())
}
