//! A phonetic dictionary.
//!
//! This reads the `cmudict` pronouncing dictionary, in either the original `cmudict-0.7b` layout
//! or the `cmusphinx` one:
//!
//! ```text
//! ;;; comments start with three semicolons
//! aluminium  AH0 L UW1 M IH0 N AH0 M
//! aluminium(2)  AE2 L Y UW1 M IH0 N AH0 M
//! achill AE1 K IH0 L # place, irish
//! ```
//!
//! Each line is a spelling followed by one transcription. Alternate pronunciations repeat the
//! spelling with a `(N)` suffix; these are all folded onto the same `Word`.
//!
//! Phonemes are ARPABET codes (see `arpabet`). Vowels carry a stress digit: zero for no stress,
//! one for primary and two for secondary stress. Real dictionary files contain some noise, so a
//! token that is not a known code, or whose stress digit does not fit its symbol, is dropped from
//! the transcription rather than failing the line.
//!
//! Related references:
//!
//! * <https://github.com/cmusphinx/cmudict>
//! * <https://cmusphinx.github.io/wiki/tutorialdict/>
//!
use std::collections::hash_map;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::rhymes::arpabet::Arpabet;
use crate::rhymes::error::{Error, Result};
use crate::rhymes::phoneme::{Phoneme, Stress};
use crate::rhymes::pronunciation::Pronunciation;
use crate::rhymes::word::Word;

const COMMENT_MARKER: &str = ";;;";

lazy_static! {
    // Matches the "(N)" disambiguator on alternate spellings, e.g. in "aalborg(2)".
    static ref VARIANT_RE: Regex = Regex::new(r"\([0-9]+\)").unwrap();
    // Matches phoneme tokens like "AA1", "N" and "AH0". Group 1 is the code, group 2 the
    // optional stress digit.
    static ref PHONEME_RE: Regex = Regex::new(r"^([A-Z]+)([0-9])?$").unwrap();
}

/// How spellings are normalized when they are stored.
///
/// The dictionary applies this to every parsed spelling. Lookups are exact, so callers should
/// pass query text through `Dictionary::normalize` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseFolding {
    /// Keep spellings exactly as they appear in the source.
    Preserve,
    Lower,
    Upper,
}

impl CaseFolding {
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseFolding::Preserve => String::from(text),
            CaseFolding::Lower => text.to_lowercase(),
            CaseFolding::Upper => text.to_uppercase(),
        }
    }
}

impl FromStr for CaseFolding {
    type Err = Error;

    fn from_str(s: &str) -> Result<CaseFolding> {
        match s {
            "preserve" => Ok(CaseFolding::Preserve),
            "lower" => Ok(CaseFolding::Lower),
            "upper" => Ok(CaseFolding::Upper),
            other => Err(Error::Config(format!("unknown case folding {:?}", other))),
        }
    }
}

/// Parses one phoneme token such as `"AE1"` or `"K"`.
///
/// Returns None when the token is not a known symbol, when the stress digit is out of range, or
/// when the stress does not match the symbol (a vowel without a digit, a consonant with one).
pub fn parse_phoneme(token: &str) -> Option<Phoneme> {
    let cap = PHONEME_RE.captures(token)?;
    let arpabet = Arpabet::from_code(&cap[1])?;
    let stress = match cap.get(2) {
        Some(d) => Stress::from_digit(d.as_str().parse().ok()?).ok()?,
        None => Stress::None,
    };
    Phoneme::new(arpabet, stress).ok()
}

/// Builds a pronunciation from whitespace-separated phoneme tokens, skipping bad tokens.
pub fn parse_transcription(text: &str) -> Pronunciation {
    text.split_whitespace()
        .filter_map(|token| {
            let ph = parse_phoneme(token);
            if ph.is_none() {
                debug!("Dropping unrecognized phoneme token {:?}", token);
            }
            ph
        })
        .collect()
}

/// A collection of words and their pronunciations.
///
/// Fill it with `parse_line` / `load_dictionary`, then query it. Queries only need `&self`, so a
/// loaded dictionary can be shared between threads without locking.
#[derive(Debug)]
pub struct Dictionary {
    words: HashMap<String, Word>,
    case_folding: CaseFolding,
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::new()
    }
}

impl Dictionary {
    /// Creates a new empty Dictionary that stores spellings as written.
    pub fn new() -> Dictionary {
        Dictionary::with_case_folding(CaseFolding::Preserve)
    }

    pub fn with_case_folding(case_folding: CaseFolding) -> Dictionary {
        Dictionary {
            words: HashMap::new(),
            case_folding,
        }
    }

    /// Creates a new dictionary, populated from the given text file.
    pub fn from_file<P: AsRef<Path>>(path: P, case_folding: CaseFolding) -> Result<Dictionary> {
        let path = path.as_ref();
        let load_error = |source| Error::Load {
            path: path.to_path_buf(),
            source,
        };

        info!("Loading dictionary from {}", path.display());
        let f = File::open(path).map_err(load_error)?;
        let mut dict = Dictionary::with_case_folding(case_folding);
        dict.load_dictionary(BufReader::new(f)).map_err(|e| match e {
            Error::Io(source) => load_error(source),
            other => other,
        })?;
        Ok(dict)
    }

    pub fn case_folding(&self) -> CaseFolding {
        self.case_folding
    }

    /// Normalizes query text the same way parsed spellings were normalized.
    pub fn normalize(&self, text: &str) -> String {
        self.case_folding.apply(text.trim())
    }

    /// Feeds every line of `reader` to `parse_line`, in order.
    ///
    /// A failure reading the source stops the load and is returned. A line that cannot be stored
    /// (e.g. its spelling is empty once the variant suffix is removed) is logged and skipped.
    pub fn load_dictionary<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if let Err(e) = self.parse_line(&line) {
                warn!("Skipping dictionary line {}: {}", i + 1, e);
            }
        }
        info!(
            "Loaded {} words with {} pronunciations.",
            self.word_count(),
            self.pronunciation_count()
        );
        Ok(())
    }

    /// Parses a single line of cmudict text into the dictionary.
    ///
    /// Blank lines, `;;;` comments and spellings without a transcription are ignored.
    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return Ok(());
        }

        let (term, rest) = match line.find(char::is_whitespace) {
            Some(i) => line.split_at(i),
            None => return Ok(()),
        };
        // Strip comments if present ('#' through the end of line).
        let rest = match rest.find('#') {
            Some(i) => &rest[..i],
            None => rest,
        };
        if rest.trim().is_empty() {
            return Ok(());
        }

        let spelling = self.case_folding.apply(&VARIANT_RE.replace_all(term, ""));
        let pronunciation = parse_transcription(rest);

        let word = match self.words.entry(spelling) {
            hash_map::Entry::Occupied(e) => e.into_mut(),
            hash_map::Entry::Vacant(e) => {
                let word = Word::new(e.key())?;
                e.insert(word)
            }
        };
        word.add_pronunciation(pronunciation);
        Ok(())
    }

    /// Inserts a fully built word. Fails if the spelling is already present.
    pub fn add_word(&mut self, word: Word) -> Result<()> {
        match self.words.entry(String::from(word.spelling())) {
            hash_map::Entry::Occupied(e) => Err(Error::DuplicateWord(e.key().clone())),
            hash_map::Entry::Vacant(e) => {
                e.insert(word);
                Ok(())
            }
        }
    }

    /// Returns the word with exactly this spelling, or None.
    pub fn get_word(&self, spelling: &str) -> Option<&Word> {
        self.words.get(spelling)
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    /// Returns the number of distinct spellings in the dictionary.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of distinct pronunciations across all words.
    pub fn pronunciation_count(&self) -> usize {
        self.words.values().map(|w| w.pronunciations().len()).sum()
    }

    /// Returns the spellings of every word with a pronunciation that rhymes with a
    /// pronunciation of `spelling`. The word itself is included when it rhymes with itself.
    pub fn get_rhymes(&self, spelling: &str) -> Result<BTreeSet<String>> {
        let target = self
            .get_word(spelling)
            .ok_or_else(|| Error::UnknownWord(String::from(spelling)))?;

        Ok(self
            .words
            .values()
            .filter(|candidate| target.rhymes_with(candidate))
            .map(|candidate| String::from(candidate.spelling()))
            .collect())
    }
}
