//! Phonological predicates and grade lookups over the phoneme inventory.
//!
//! Every function is total: input that does not name a phoneme, or a
//! phoneme outside a function's domain, yields `false` / `None`.

use serde::Serialize;

use crate::phoneme::{ConsonantFeatures, Length, Manner, Place, PhonemeId};
use crate::tokenizer::Token;

use PhonemeId::*;

/// Anything that may name a single phoneme.
pub trait AsPhoneme {
    fn as_phoneme(&self) -> Option<PhonemeId>;
}

impl AsPhoneme for PhonemeId {
    fn as_phoneme(&self) -> Option<PhonemeId> {
        Some(*self)
    }
}

impl AsPhoneme for Token {
    fn as_phoneme(&self) -> Option<PhonemeId> {
        self.phoneme_id()
    }
}

/// A canonical id such as `VOWEL_I_SHORT`.
impl AsPhoneme for str {
    fn as_phoneme(&self) -> Option<PhonemeId> {
        PhonemeId::from_canonical_id(self)
    }
}

impl<Inner: AsPhoneme + ?Sized> AsPhoneme for &Inner {
    fn as_phoneme(&self) -> Option<PhonemeId> {
        (**self).as_phoneme()
    }
}

pub fn is_vowel(p: impl AsPhoneme) -> bool {
    p.as_phoneme().is_some_and(|id| id.phoneme().is_vowel())
}

/// True for consonant letters and for the signs (anusvāra, visarga, candrabindu).
pub fn is_consonant(p: impl AsPhoneme) -> bool {
    p.as_phoneme().is_some_and(|id| !id.phoneme().is_vowel())
}

pub fn is_ik_vowel(p: impl AsPhoneme) -> bool {
    p.as_phoneme().is_some_and(|id| id.phoneme().is_ik)
}

pub fn vowel_length(p: impl AsPhoneme) -> Option<Length> {
    p.as_phoneme().and_then(|id| id.phoneme().length)
}

/// Guṇa grade of an ik-vowel (i→e, u→o, ṛ→ar, ḷ→al).
pub fn guna_of(p: impl AsPhoneme) -> Option<&'static [PhonemeId]> {
    p.as_phoneme().and_then(|id| id.phoneme().guna)
}

/// Vṛddhi grade of an ik-vowel, plus a→ā, e→ai, ai→ai, o→au, au→au.
///
/// `ai` and `au` are already vṛddhi and map to themselves: the vṛddhi
/// rule replaces `a/ā` + any of `e ai o au` with this value, so
/// `mahā + auṣadhiḥ` keeps its `au`.
pub fn vrddhi_of(p: impl AsPhoneme) -> Option<&'static [PhonemeId]> {
    p.as_phoneme().and_then(|id| id.phoneme().vrddhi)
}

pub fn consonant_features_of(p: impl AsPhoneme) -> Option<ConsonantFeatures> {
    p.as_phoneme().and_then(|id| id.phoneme().features)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Guna,
    Vrddhi,
}

/// Grade of a vowel or vowel + liquid sequence, if it is a guṇa or vṛddhi form.
///
/// Plain `a` counts as guṇa, matching the traditional listing a/e/o.
pub fn grade_of(seq: &[PhonemeId]) -> Option<Grade> {
    match seq {
        [A] | [E] | [O] | [A, R] | [A, L] => Some(Grade::Guna),
        [Aa] | [Ai] | [Au] | [Aa, R] | [Aa, L] => Some(Grade::Vrddhi),
        _ => None,
    }
}

/// Vowel family for savarṇa comparison. Diphthongs have none.
fn family(id: PhonemeId) -> Option<u8> {
    match id {
        A | Aa => Some(0),
        I | Ii => Some(1),
        U | Uu => Some(2),
        VocalicR | VocalicRr => Some(3),
        VocalicL | VocalicLl => Some(4),
        _ => None,
    }
}

/// Two simple vowels of the same family, regardless of length.
pub fn savarna(a: PhonemeId, b: PhonemeId) -> bool {
    matches!((family(a), family(b)), (Some(x), Some(y)) if x == y)
}

/// Long vowel of a simple vowel's family.
pub fn lengthened(v: PhonemeId) -> Option<PhonemeId> {
    match v {
        A | Aa => Some(Aa),
        I | Ii => Some(Ii),
        U | Uu => Some(Uu),
        VocalicR | VocalicRr => Some(VocalicRr),
        VocalicL | VocalicLl => Some(VocalicLl),
        _ => None,
    }
}

/// Semivowel replacing an ik-vowel before a dissimilar vowel.
pub fn semivowel_of(ik: PhonemeId) -> Option<PhonemeId> {
    match ik {
        I | Ii => Some(Y),
        U | Uu => Some(V),
        VocalicR | VocalicRr => Some(R),
        VocalicL | VocalicLl => Some(L),
        _ => None,
    }
}

/// Class nasal of a stop or nasal. Semivowels, sibilants and h have none.
pub fn homorganic_nasal(consonant: PhonemeId) -> Option<PhonemeId> {
    let features = consonant.phoneme().features?;
    if !matches!(features.manner, Manner::Stop | Manner::Nasal) {
        return None;
    }
    match features.place {
        Place::Velar => Some(Ng),
        Place::Palatal => Some(Ny),
        Place::Retroflex => Some(Nn),
        Place::Dental => Some(N),
        Place::Labial => Some(M),
        Place::Glottal | Place::Nasal => None,
    }
}
