//! Yes/no confirmation on stdin.

use anyhow::Result;
use std::io::{BufRead, Write};

/// Print `question` and read one line. Only a bare `y` or `Y` confirms;
/// anything else, including padded answers and end of input, declines.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    write!(out, "{} (y/n): ", question)?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    let answer = answer.trim_end_matches(['\r', '\n']);
    Ok(answer.eq_ignore_ascii_case("y"))
}
