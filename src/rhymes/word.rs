//! A spelling together with all of its distinct pronunciations.

use std::collections::HashSet;

use crate::rhymes::error::{Error, Result};
use crate::rhymes::pronunciation::Pronunciation;

#[derive(Clone, Debug)]
pub struct Word {
    spelling: String,
    pronunciations: HashSet<Pronunciation>,
}

impl Word {
    /// Creates a word with no pronunciations. Fails on an empty or whitespace-only spelling.
    pub fn new(spelling: &str) -> Result<Word> {
        if spelling.trim().is_empty() {
            return Err(Error::InvalidSpelling(String::from(spelling)));
        }
        Ok(Word {
            spelling: String::from(spelling),
            pronunciations: HashSet::new(),
        })
    }

    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// Adds a pronunciation. Returns false if an identical one was already present.
    pub fn add_pronunciation(&mut self, pronunciation: Pronunciation) -> bool {
        self.pronunciations.insert(pronunciation)
    }

    pub fn pronunciations(&self) -> &HashSet<Pronunciation> {
        &self.pronunciations
    }

    /// Returns whether any pronunciation of this word rhymes with any pronunciation of `other`.
    pub fn rhymes_with(&self, other: &Word) -> bool {
        self.pronunciations
            .iter()
            .any(|mine| other.pronunciations.iter().any(|theirs| mine.rhymes_with(theirs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhymes::dictionary::parse_transcription;

    #[test]
    fn test_rejects_blank_spellings() {
        assert!(matches!(Word::new(""), Err(Error::InvalidSpelling(_))));
        assert!(matches!(Word::new("  \t"), Err(Error::InvalidSpelling(_))));
        assert_eq!(Word::new("a.m.").unwrap().spelling(), "a.m.");
    }

    #[test]
    fn test_duplicate_pronunciations_collapse() {
        let mut word = Word::new("either").unwrap();
        assert!(word.add_pronunciation(parse_transcription("IY1 DH ER0")));
        assert!(word.add_pronunciation(parse_transcription("AY1 DH ER0")));
        assert!(!word.add_pronunciation(parse_transcription("IY1 DH ER0")));
        assert_eq!(word.pronunciations().len(), 2);
    }

    #[test]
    fn test_stress_is_part_of_identity() {
        let mut word = Word::new("cat").unwrap();
        word.add_pronunciation(parse_transcription("K AE0 T"));
        word.add_pronunciation(parse_transcription("K AE1 T"));
        assert_eq!(word.pronunciations().len(), 2);
    }

    #[test]
    fn test_word_rhymes_through_any_pronunciation() {
        let mut read = Word::new("read").unwrap();
        read.add_pronunciation(parse_transcription("R IY1 D"));
        read.add_pronunciation(parse_transcription("R EH1 D"));
        let mut bed = Word::new("bed").unwrap();
        bed.add_pronunciation(parse_transcription("B EH1 D"));
        let mut cat = Word::new("cat").unwrap();
        cat.add_pronunciation(parse_transcription("K AE1 T"));
        assert!(read.rhymes_with(&bed));
        assert!(bed.rhymes_with(&read));
        assert!(!cat.rhymes_with(&read));
    }
}
