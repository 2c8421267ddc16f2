//! Front-matter `part:` label extraction.
//!
//! Documents may begin with a front-matter block delimited by `---` lines,
//! holding `key: value` pairs. Only the `part:` key is recognized; it assigns
//! the document to a grouping label. Missing or malformed front matter is not
//! an error: it yields an empty label, which is itself a meaningful value
//! (ungrouped content).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Front-matter block delimiter line prefix.
const DELIMITER: &str = "---";

/// Recognized group-label key.
const PART_KEY: &str = "part:";

/// Read the part label from a document on disk.
///
/// Opens the file, scans the leading front-matter block, and returns as soon
/// as the label (or the end of the block) is seen; the file handle never
/// outlives the call.
pub fn read_part_label(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    part_label(BufReader::new(file))
}

/// Extract the part label from a document's leading front-matter block.
///
/// The first line must start with the delimiter to enter front-matter mode;
/// anything else yields an empty label. Inside the block, the first line
/// starting with `part:` yields the trimmed remainder. The closing delimiter
/// line, or end of input, before any `part:` line yields an empty label.
/// Other lines inside the block are skipped.
pub fn part_label(reader: impl BufRead) -> io::Result<String> {
    let mut lines = reader.lines();

    let Some(first) = lines.next() else {
        return Ok(String::new());
    };
    if !first?.starts_with(DELIMITER) {
        return Ok(String::new());
    }

    for line in lines {
        let line = line?;
        if let Some(value) = line.strip_prefix(PART_KEY) {
            return Ok(value.trim().to_owned());
        }
        if line.starts_with(DELIMITER) {
            break;
        }
    }

    Ok(String::new())
}
