//! The ARPABET symbol catalog used by cmudict.
//!
//! cmudict uses 39 of the ARPABET 2-letter codes: 15 vowel sounds and 24 consonants. See
//! <https://en.wikipedia.org/wiki/ARPABET> and <http://www.speech.cs.cmu.edu/cgi-bin/cmudict>.
//!
//! Every symbol has a fixed vowel/consonant classification. Vowels are written in the dictionary
//! with a stress digit (`AH0`, `EY1`), consonants without one (`K`, `NG`).

use std::fmt;
use std::str::FromStr;

use crate::rhymes::error::{Error, Result};

/// One ARPABET phoneme symbol, without stress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arpabet {
    AA,
    AE,
    AH,
    AO,
    AW,
    AY,
    B,
    CH,
    D,
    DH,
    EH,
    ER,
    EY,
    F,
    G,
    HH,
    IH,
    IY,
    JH,
    K,
    L,
    M,
    N,
    NG,
    OW,
    OY,
    P,
    R,
    S,
    SH,
    T,
    TH,
    UH,
    UW,
    V,
    W,
    Y,
    Z,
    ZH,
}

use Arpabet::*;

/// All symbols, in alphabetical order.
pub const ALL: [Arpabet; 39] = [
    AA, AE, AH, AO, AW, AY, B, CH, D, DH, EH, ER, EY, F, G, HH, IH, IY, JH, K, L, M, N, NG, OW, OY,
    P, R, S, SH, T, TH, UH, UW, V, W, Y, Z, ZH,
];

impl Arpabet {
    /// Returns whether the symbol is a vowel sound. Vowels are the symbols that carry stress.
    pub fn is_vowel(self) -> bool {
        matches!(
            self,
            AA | AE | AH | AO | AW | AY | EH | ER | EY | IH | IY | OW | OY | UH | UW
        )
    }

    /// The dictionary code for the symbol, e.g. `"NG"`.
    pub fn code(self) -> &'static str {
        match self {
            AA => "AA",
            AE => "AE",
            AH => "AH",
            AO => "AO",
            AW => "AW",
            AY => "AY",
            B => "B",
            CH => "CH",
            D => "D",
            DH => "DH",
            EH => "EH",
            ER => "ER",
            EY => "EY",
            F => "F",
            G => "G",
            HH => "HH",
            IH => "IH",
            IY => "IY",
            JH => "JH",
            K => "K",
            L => "L",
            M => "M",
            N => "N",
            NG => "NG",
            OW => "OW",
            OY => "OY",
            P => "P",
            R => "R",
            S => "S",
            SH => "SH",
            T => "T",
            TH => "TH",
            UH => "UH",
            UW => "UW",
            V => "V",
            W => "W",
            Y => "Y",
            Z => "Z",
            ZH => "ZH",
        }
    }

    /// Looks up a symbol by its exact (uppercase) code. Returns None for anything else.
    pub fn from_code(code: &str) -> Option<Arpabet> {
        ALL.iter().copied().find(|a| a.code() == code)
    }
}

impl FromStr for Arpabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Arpabet> {
        Arpabet::from_code(s).ok_or_else(|| Error::UnknownSymbol(String::from(s)))
    }
}

impl fmt::Display for Arpabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}
