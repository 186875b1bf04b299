//! One way of saying a word, and the rhyme test between two of them.

use std::fmt;
use std::iter::FromIterator;

use crate::rhymes::phoneme::{Phoneme, Stress};

/// An ordered sequence of phonemes, kept exactly as transcribed.
///
/// Equality and hashing are structural, so a `Word` holding these in a set collapses repeated
/// transcriptions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pronunciation {
    phonemes: Vec<Phoneme>,
}

// The stress classes tried, in order, when looking for the rhyming vowel.
const STRESS_PRIORITY: [Stress; 3] = [Stress::Primary, Stress::Secondary, Stress::Neutral];

impl Pronunciation {
    pub fn new() -> Pronunciation {
        Pronunciation { phonemes: vec![] }
    }

    /// Appends a phoneme to the end of the pronunciation.
    pub fn push(&mut self, phoneme: Phoneme) {
        self.phonemes.push(phoneme);
    }

    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    /// Returns the index of the vowel the rhyme is measured from.
    ///
    /// This is the last vowel with primary stress. Without one, the last vowel with secondary
    /// stress, and failing that the last unstressed vowel. Returns None if there are no vowels.
    pub fn find_final_stressed_vowel_index(&self) -> Option<usize> {
        STRESS_PRIORITY.iter().find_map(|&stress| {
            self.phonemes
                .iter()
                .rposition(|p| p.is_vowel() && p.stress() == stress)
        })
    }

    /// The phonemes from the final stressed vowel to the end, if there is such a vowel.
    pub fn rhyming_tail(&self) -> Option<&[Phoneme]> {
        self.find_final_stressed_vowel_index()
            .map(|i| &self.phonemes[i..])
    }

    /// Returns whether the two pronunciations rhyme.
    ///
    /// They rhyme when the tails starting at each one's final stressed vowel have the same
    /// length and the same symbols position by position. Stress within the tails is ignored.
    pub fn rhymes_with(&self, other: &Pronunciation) -> bool {
        match (self.rhyming_tail(), other.rhyming_tail()) {
            (Some(a), Some(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.has_same_arpabet(y))
            }
            _ => false,
        }
    }
}

impl FromIterator<Phoneme> for Pronunciation {
    fn from_iter<I: IntoIterator<Item = Phoneme>>(iter: I) -> Self {
        Pronunciation {
            phonemes: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, p) in self.phonemes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}
