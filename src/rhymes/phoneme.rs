//! A single transcribed sound: an ARPABET symbol plus its lexical stress.

use std::fmt;

use crate::rhymes::arpabet::Arpabet;
use crate::rhymes::error::{Error, Result};

/// Lexical stress, as written in cmudict with a trailing digit.
///
/// Zero is unstressed, one is primary stress, two is secondary. Consonants have no stress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stress {
    None,
    Neutral,
    Primary,
    Secondary,
}

impl Stress {
    /// Converts a cmudict stress digit. Only 0, 1 and 2 are meaningful.
    pub fn from_digit(digit: u32) -> Result<Stress> {
        match digit {
            0 => Ok(Stress::Neutral),
            1 => Ok(Stress::Primary),
            2 => Ok(Stress::Secondary),
            d => Err(Error::InvalidStress(format!("unknown stress digit {}", d))),
        }
    }

    /// The digit written after a vowel, or None for consonants.
    pub fn digit(self) -> Option<u32> {
        match self {
            Stress::None => None,
            Stress::Neutral => Some(0),
            Stress::Primary => Some(1),
            Stress::Secondary => Some(2),
        }
    }
}

/// A validated (symbol, stress) pair. Vowels always carry a stress, consonants never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Phoneme {
    arpabet: Arpabet,
    stress: Stress,
}

impl Phoneme {
    pub fn new(arpabet: Arpabet, stress: Stress) -> Result<Phoneme> {
        match (arpabet.is_vowel(), stress) {
            (false, Stress::None) => Ok(Phoneme { arpabet, stress }),
            (false, _) => Err(Error::InvalidStress(format!(
                "consonant {} cannot carry stress {:?}",
                arpabet, stress
            ))),
            (true, Stress::None) => Err(Error::InvalidStress(format!(
                "vowel {} requires a stress of 0, 1 or 2",
                arpabet
            ))),
            (true, _) => Ok(Phoneme { arpabet, stress }),
        }
    }

    pub fn arpabet(&self) -> Arpabet {
        self.arpabet
    }

    pub fn stress(&self) -> Stress {
        self.stress
    }

    pub fn is_vowel(&self) -> bool {
        self.arpabet.is_vowel()
    }

    /// Returns whether both phonemes are the same sound, ignoring stress.
    pub fn has_same_arpabet(&self, other: &Phoneme) -> bool {
        self.arpabet == other.arpabet
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.stress.digit() {
            Some(d) => write!(f, "{}{}", self.arpabet, d),
            None => write!(f, "{}", self.arpabet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhymes::arpabet::ALL;

    const STRESSES: [Stress; 4] = [
        Stress::None,
        Stress::Neutral,
        Stress::Primary,
        Stress::Secondary,
    ];

    #[test]
    fn test_construction_follows_vowel_rule() {
        for &a in ALL.iter() {
            for &s in STRESSES.iter() {
                let valid = a.is_vowel() != (s == Stress::None);
                match Phoneme::new(a, s) {
                    Ok(p) => {
                        assert!(valid, "{:?} {:?} should be rejected", a, s);
                        assert_eq!(p.arpabet(), a);
                        assert_eq!(p.stress(), s);
                    }
                    Err(Error::InvalidStress(_)) => assert!(!valid, "{:?} {:?} should be ok", a, s),
                    Err(e) => panic!("unexpected error {}", e),
                }
            }
        }
    }

    #[test]
    fn test_stress_digits() {
        assert_eq!(Stress::from_digit(0).unwrap(), Stress::Neutral);
        assert_eq!(Stress::from_digit(1).unwrap(), Stress::Primary);
        assert_eq!(Stress::from_digit(2).unwrap(), Stress::Secondary);
        assert!(matches!(Stress::from_digit(3), Err(Error::InvalidStress(_))));
        assert_eq!(Stress::Secondary.digit(), Some(2));
        assert_eq!(Stress::None.digit(), None);
    }

    #[test]
    fn test_same_arpabet_ignores_stress() {
        let aa1 = Phoneme::new(Arpabet::AA, Stress::Primary).unwrap();
        let aa2 = Phoneme::new(Arpabet::AA, Stress::Secondary).unwrap();
        let ae1 = Phoneme::new(Arpabet::AE, Stress::Primary).unwrap();
        assert!(aa1.has_same_arpabet(&aa1));
        assert!(aa1.has_same_arpabet(&aa2));
        assert!(aa2.has_same_arpabet(&aa1));
        assert!(!aa1.has_same_arpabet(&ae1));
        assert_ne!(aa1, aa2);
    }

    #[test]
    fn test_display() {
        let k = Phoneme::new(Arpabet::K, Stress::None).unwrap();
        let ah0 = Phoneme::new(Arpabet::AH, Stress::Neutral).unwrap();
        assert_eq!(format!("{} {}", k, ah0), "K AH0");
    }
}
