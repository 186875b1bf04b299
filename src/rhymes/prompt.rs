//! The text front-end: rhyme listings for single words and the interactive prompt.

use std::io::{self, BufRead, Write};

use tracing::error;

use crate::rhymes::dictionary::Dictionary;
use crate::rhymes::error::Error;

const PROMPT: &str = "Enter a word to find its rhymes: ";

/// Writes the rhymes for one word of user input, or explains why there are none.
///
/// The input is folded with the dictionary's case policy before lookup.
pub fn write_rhymes<W: Write>(out: &mut W, dict: &Dictionary, input: &str) -> io::Result<()> {
    let spelling = dict.normalize(input);
    match dict.get_rhymes(&spelling) {
        Ok(rhymes) if rhymes.is_empty() => {
            writeln!(out, "No rhymes found for the word \"{}\".", spelling)
        }
        Ok(rhymes) => {
            writeln!(out, "Words that rhyme with \"{}\":", spelling)?;
            for rhyme in rhymes {
                writeln!(out, "{}", rhyme)?;
            }
            Ok(())
        }
        Err(Error::UnknownWord(_)) => {
            writeln!(out, "The word \"{}\" is not in the dictionary.", spelling)
        }
        Err(e) => {
            error!("Query for {:?} failed: {}", spelling, e);
            Ok(())
        }
    }
}

/// Prompts for words on `input` until EOF or an empty line, answering each on `out`.
pub fn run_prompt<R: BufRead, W: Write>(dict: &Dictionary, mut input: R, mut out: W) -> io::Result<()> {
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let word = line.trim();
        if word.is_empty() {
            break;
        }
        write_rhymes(&mut out, dict, word)?;
    }
    Ok(())
}
