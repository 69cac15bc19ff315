//! Line-based console prompts.
//!
//! Every prompt returns `Ok(None)` once the input is exhausted so the caller
//! can wind the session down.

use crate::core::constants::INVALID_INPUT_MARKER;
use std::io::{self, BufRead, Write};

/// Reads one line, without its line ending. `None` at end of input.
pub fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompts until the user enters a number for which `accept` holds.
///
/// Non-numeric and rejected entries print `[invalid] ` and re-prompt.
pub fn prompt_index(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    accept: impl Fn(usize) -> bool,
) -> io::Result<Option<usize>> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match line.trim().parse::<usize>() {
            Ok(index) if accept(index) => return Ok(Some(index)),
            _ => write!(output, "{}", INVALID_INPUT_MARKER)?,
        }
    }
}

/// Asks a y/n question. Only an exact `y` counts as yes.
pub fn prompt_yes_no(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<bool>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    Ok(read_line(input)?.map(|line| line.trim() == "y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_index(script: &str, accept: impl Fn(usize) -> bool) -> (Option<usize>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_index(&mut input, &mut output, "Attacker: ", accept).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_index_accepts_valid_number() {
        let (result, output) = run_index("3\n", |i| i < 5);
        assert_eq!(result, Some(3));
        assert_eq!(output, "Attacker: ");
    }

    #[test]
    fn test_prompt_index_reprompts_on_garbage_and_out_of_range() {
        let (result, output) = run_index("abc\n-1\n9\n  2  \n", |i| i < 5);
        assert_eq!(result, Some(2));
        assert_eq!(output.matches("[invalid] ").count(), 3);
        assert_eq!(output.matches("Attacker: ").count(), 4);
    }

    #[test]
    fn test_prompt_index_end_of_input() {
        let (result, _) = run_index("x\n", |_| true);
        assert_eq!(result, None);
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut output = Vec::new();
        for (script, expected) in [
            ("y\n", Some(true)),
            ("y\r\n", Some(true)),
            ("n\n", Some(false)),
            ("yes\n", Some(false)),
            ("", None),
        ] {
            let mut input = Cursor::new(script.as_bytes().to_vec());
            let answer = prompt_yes_no(&mut input, &mut output, "Return fire? (y/n) ").unwrap();
            assert_eq!(answer, expected, "script {:?}", script);
        }
    }
}
