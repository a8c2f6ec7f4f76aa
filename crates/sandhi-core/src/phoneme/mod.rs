//! Static phoneme inventory shared by every other component.
//!
//! The table is plain immutable data: `PHONEMES` is indexed by
//! `PhonemeId as usize`, and the per-script surface tries built from it
//! live behind `OnceLock`s in [`trie`].

mod table;
pub(crate) mod trie;

use serde::Serialize;

pub use table::PHONEMES;
pub use trie::{Entry, SurfaceForm, SurfaceTrie, Target};

/// Script-independent identity of a sound unit.
///
/// Variant order is the order of [`PHONEMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhonemeId {
    // vowels
    A,
    Aa,
    I,
    Ii,
    U,
    Uu,
    VocalicR,
    VocalicRr,
    VocalicL,
    VocalicLl,
    E,
    Ai,
    O,
    Au,
    // stops and nasals, by class
    K,
    Kh,
    G,
    Gh,
    Ng,
    C,
    Ch,
    J,
    Jh,
    Ny,
    Tt,
    Tth,
    Dd,
    Ddh,
    Nn,
    T,
    Th,
    D,
    Dh,
    N,
    P,
    Ph,
    B,
    Bh,
    M,
    // semivowels, sibilants, h
    Y,
    R,
    L,
    V,
    Sh,
    Ss,
    S,
    H,
    Lla,
    // signs
    Anusvara,
    Visarga,
    Candrabindu,
}

impl PhonemeId {
    /// Table row for this phoneme.
    pub fn phoneme(self) -> &'static Phoneme {
        &PHONEMES[self as usize]
    }

    pub fn canonical_id(self) -> &'static str {
        self.phoneme().canonical_id
    }

    /// Parse a canonical id string such as `VOWEL_I_SHORT`.
    pub fn from_canonical_id(id: &str) -> Option<PhonemeId> {
        PHONEMES.iter().find(|p| p.canonical_id == id).map(|p| p.id)
    }

    pub fn all() -> impl Iterator<Item = PhonemeId> {
        PHONEMES.iter().map(|p| p.id)
    }
}

impl Serialize for PhonemeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_id())
    }
}

impl std::fmt::Display for PhonemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vowel,
    Consonant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Long,
    Diphthong,
}

/// Traditional place of articulation (sthāna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    Velar,
    Palatal,
    Retroflex,
    Dental,
    Labial,
    Glottal,
    Nasal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Manner {
    Stop,
    Nasal,
    Semivowel,
    Sibilant,
    Fricative,
    Anusvara,
    Visarga,
    Candrabindu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Voicing {
    Voiced,
    Voiceless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsonantFeatures {
    pub place: Place,
    pub manner: Manner,
    pub voicing: Voicing,
    pub aspirated: bool,
}

/// One row of the phoneme inventory.
#[derive(Debug)]
pub struct Phoneme {
    pub id: PhonemeId,
    pub canonical_id: &'static str,
    /// Primary IAST spelling, always non-empty.
    pub iast: &'static str,
    /// Accepted on input, never rendered.
    pub iast_alternates: &'static [&'static str],
    /// Independent vowel letter, bare consonant letter, or sign.
    pub devanagari: Option<&'static str>,
    /// Dependent vowel sign. `None` for consonants and for `a`.
    pub matra: Option<&'static str>,
    pub category: Category,
    pub length: Option<Length>,
    pub is_ik: bool,
    pub guna: Option<&'static [PhonemeId]>,
    pub vrddhi: Option<&'static [PhonemeId]>,
    pub features: Option<ConsonantFeatures>,
}

impl Phoneme {
    pub fn is_vowel(&self) -> bool {
        self.category == Category::Vowel
    }

    /// Anusvāra, visarga or candrabindu.
    pub fn is_sign(&self) -> bool {
        matches!(
            self.features.map(|f| f.manner),
            Some(Manner::Anusvara | Manner::Visarga | Manner::Candrabindu)
        )
    }

    /// A consonant letter proper: takes mātrās and virāma in Devanagari.
    pub fn is_consonant_letter(&self) -> bool {
        self.category == Category::Consonant && !self.is_sign()
    }
}

/// Script-specific punctuation and digits that have a cross-script identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Avagraha,
    Danda,
    DoubleDanda,
    Digit(u8),
}

impl Mark {
    pub fn iast(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Mark::Avagraha => "'",
            Mark::Danda => "|",
            Mark::DoubleDanda => "||",
            Mark::Digit(d) => DIGITS[usize::from(d % 10)],
        }
    }

    pub fn devanagari(self) -> &'static str {
        const DIGITS: [&str; 10] = ["०", "१", "२", "३", "४", "५", "६", "७", "८", "९"];
        match self {
            Mark::Avagraha => "ऽ",
            Mark::Danda => "।",
            Mark::DoubleDanda => "॥",
            Mark::Digit(d) => DIGITS[usize::from(d % 10)],
        }
    }

    pub(crate) fn all() -> impl Iterator<Item = Mark> {
        [Mark::Avagraha, Mark::Danda, Mark::DoubleDanda]
            .into_iter()
            .chain((0..10).map(Mark::Digit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        for (i, p) in PHONEMES.iter().enumerate() {
            assert_eq!(p.id as usize, i, "row {i} holds {:?}", p.id);
        }
        assert_eq!(PhonemeId::all().count(), PHONEMES.len());
    }

    #[test]
    fn every_phoneme_has_iast_form() {
        for p in PHONEMES {
            assert!(!p.iast.is_empty(), "{} has empty IAST form", p.canonical_id);
        }
    }

    #[test]
    fn canonical_ids_are_unique_and_parse_back() {
        let mut seen = std::collections::HashSet::new();
        for p in PHONEMES {
            assert!(seen.insert(p.canonical_id), "duplicate {}", p.canonical_id);
            assert_eq!(PhonemeId::from_canonical_id(p.canonical_id), Some(p.id));
        }
        assert_eq!(PhonemeId::from_canonical_id("VOWEL_X"), None);
    }

    #[test]
    fn vowels_have_length_consonants_have_features() {
        for p in PHONEMES {
            match p.category {
                Category::Vowel => {
                    assert!(p.length.is_some(), "{}", p.canonical_id);
                    assert!(p.features.is_none(), "{}", p.canonical_id);
                }
                Category::Consonant => {
                    assert!(p.length.is_none(), "{}", p.canonical_id);
                    assert!(p.features.is_some(), "{}", p.canonical_id);
                    assert!(p.matra.is_none(), "{}", p.canonical_id);
                }
            }
        }
    }

    #[test]
    fn ik_vowels_are_exactly_eight() {
        let ik: Vec<PhonemeId> = PHONEMES.iter().filter(|p| p.is_ik).map(|p| p.id).collect();
        assert_eq!(
            ik,
            vec![
                PhonemeId::I,
                PhonemeId::Ii,
                PhonemeId::U,
                PhonemeId::Uu,
                PhonemeId::VocalicR,
                PhonemeId::VocalicRr,
                PhonemeId::VocalicL,
                PhonemeId::VocalicLl,
            ]
        );
    }

    #[test]
    fn signs_are_not_letters() {
        assert!(PhonemeId::Visarga.phoneme().is_sign());
        assert!(!PhonemeId::Visarga.phoneme().is_consonant_letter());
        assert!(PhonemeId::Lla.phoneme().is_consonant_letter());
        assert!(!PhonemeId::A.phoneme().is_consonant_letter());
    }

    #[test]
    fn mark_spellings() {
        assert_eq!(Mark::Digit(7).iast(), "7");
        assert_eq!(Mark::Digit(7).devanagari(), "७");
        assert_eq!(Mark::DoubleDanda.devanagari(), "॥");
        assert_eq!(Mark::all().count(), 13);
    }
}
