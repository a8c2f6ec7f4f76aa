use super::Category::{Consonant, Vowel};
use super::Length::{Diphthong, Long, Short};
use super::{Manner, Place};
use super::PhonemeId::{self, *};
use super::Voicing::{self, *};
use super::{ConsonantFeatures, Length, Phoneme};

#[allow(clippy::too_many_arguments)]
const fn vowel(
    id: PhonemeId,
    canonical_id: &'static str,
    iast: &'static str,
    iast_alternates: &'static [&'static str],
    devanagari: &'static str,
    matra: Option<&'static str>,
    length: Length,
    is_ik: bool,
    guna: Option<&'static [PhonemeId]>,
    vrddhi: Option<&'static [PhonemeId]>,
) -> Phoneme {
    Phoneme {
        id,
        canonical_id,
        iast,
        iast_alternates,
        devanagari: Some(devanagari),
        matra,
        category: Vowel,
        length: Some(length),
        is_ik,
        guna,
        vrddhi,
        features: None,
    }
}

#[allow(clippy::too_many_arguments)]
const fn consonant(
    id: PhonemeId,
    canonical_id: &'static str,
    iast: &'static str,
    iast_alternates: &'static [&'static str],
    devanagari: &'static str,
    place: Place,
    manner: Manner,
    voicing: Voicing,
    aspirated: bool,
) -> Phoneme {
    Phoneme {
        id,
        canonical_id,
        iast,
        iast_alternates,
        devanagari: Some(devanagari),
        matra: None,
        category: Consonant,
        length: None,
        is_ik: false,
        guna: None,
        vrddhi: None,
        features: Some(ConsonantFeatures {
            place,
            manner,
            voicing,
            aspirated,
        }),
    }
}

/// The closed phoneme inventory, one row per `PhonemeId` in declaration order.
#[rustfmt::skip]
pub static PHONEMES: &[Phoneme] = &[
    vowel(A, "VOWEL_A_SHORT", "a", &[], "अ", None, Short, false, None, Some(&[Aa])),
    vowel(Aa, "VOWEL_A_LONG", "ā", &[], "आ", Some("ा"), Long, false, None, None),
    vowel(I, "VOWEL_I_SHORT", "i", &[], "इ", Some("ि"), Short, true, Some(&[E]), Some(&[Ai])),
    vowel(Ii, "VOWEL_I_LONG", "ī", &[], "ई", Some("ी"), Long, true, Some(&[E]), Some(&[Ai])),
    vowel(U, "VOWEL_U_SHORT", "u", &[], "उ", Some("ु"), Short, true, Some(&[O]), Some(&[Au])),
    vowel(Uu, "VOWEL_U_LONG", "ū", &[], "ऊ", Some("ू"), Long, true, Some(&[O]), Some(&[Au])),
    vowel(VocalicR, "VOWEL_R_SHORT", "ṛ", &["r\u{325}"], "ऋ", Some("ृ"), Short, true, Some(&[A, R]), Some(&[Aa, R])),
    vowel(VocalicRr, "VOWEL_R_LONG", "ṝ", &["r\u{325}\u{304}"], "ॠ", Some("ॄ"), Long, true, Some(&[A, R]), Some(&[Aa, R])),
    vowel(VocalicL, "VOWEL_L_SHORT", "ḷ", &["l\u{325}"], "ऌ", Some("ॢ"), Short, true, Some(&[A, L]), Some(&[Aa, L])),
    vowel(VocalicLl, "VOWEL_L_LONG", "ḹ", &["l\u{325}\u{304}"], "ॡ", Some("ॣ"), Long, true, Some(&[A, L]), Some(&[Aa, L])),
    vowel(E, "VOWEL_E", "e", &[], "ए", Some("े"), Diphthong, false, None, Some(&[Ai])),
    vowel(Ai, "VOWEL_AI", "ai", &[], "ऐ", Some("ै"), Diphthong, false, None, Some(&[Ai])),
    vowel(O, "VOWEL_O", "o", &[], "ओ", Some("ो"), Diphthong, false, None, Some(&[Au])),
    vowel(Au, "VOWEL_AU", "au", &[], "औ", Some("ौ"), Diphthong, false, None, Some(&[Au])),
    consonant(K, "CONSONANT_KA", "k", &[], "क", Place::Velar, Manner::Stop, Voiceless, false),
    consonant(Kh, "CONSONANT_KHA", "kh", &[], "ख", Place::Velar, Manner::Stop, Voiceless, true),
    consonant(G, "CONSONANT_GA", "g", &[], "ग", Place::Velar, Manner::Stop, Voiced, false),
    consonant(Gh, "CONSONANT_GHA", "gh", &[], "घ", Place::Velar, Manner::Stop, Voiced, true),
    consonant(Ng, "CONSONANT_NGA", "ṅ", &[], "ङ", Place::Velar, Manner::Nasal, Voiced, false),
    consonant(C, "CONSONANT_CA", "c", &[], "च", Place::Palatal, Manner::Stop, Voiceless, false),
    consonant(Ch, "CONSONANT_CHA", "ch", &[], "छ", Place::Palatal, Manner::Stop, Voiceless, true),
    consonant(J, "CONSONANT_JA", "j", &[], "ज", Place::Palatal, Manner::Stop, Voiced, false),
    consonant(Jh, "CONSONANT_JHA", "jh", &[], "झ", Place::Palatal, Manner::Stop, Voiced, true),
    consonant(Ny, "CONSONANT_NYA", "ñ", &[], "ञ", Place::Palatal, Manner::Nasal, Voiced, false),
    consonant(Tt, "CONSONANT_TTA", "ṭ", &[], "ट", Place::Retroflex, Manner::Stop, Voiceless, false),
    consonant(Tth, "CONSONANT_TTHA", "ṭh", &[], "ठ", Place::Retroflex, Manner::Stop, Voiceless, true),
    consonant(Dd, "CONSONANT_DDA", "ḍ", &[], "ड", Place::Retroflex, Manner::Stop, Voiced, false),
    consonant(Ddh, "CONSONANT_DDHA", "ḍh", &[], "ढ", Place::Retroflex, Manner::Stop, Voiced, true),
    consonant(Nn, "CONSONANT_NNA", "ṇ", &[], "ण", Place::Retroflex, Manner::Nasal, Voiced, false),
    consonant(T, "CONSONANT_TA", "t", &[], "त", Place::Dental, Manner::Stop, Voiceless, false),
    consonant(Th, "CONSONANT_THA", "th", &[], "थ", Place::Dental, Manner::Stop, Voiceless, true),
    consonant(D, "CONSONANT_DA", "d", &[], "द", Place::Dental, Manner::Stop, Voiced, false),
    consonant(Dh, "CONSONANT_DHA", "dh", &[], "ध", Place::Dental, Manner::Stop, Voiced, true),
    consonant(N, "CONSONANT_NA", "n", &[], "न", Place::Dental, Manner::Nasal, Voiced, false),
    consonant(P, "CONSONANT_PA", "p", &[], "प", Place::Labial, Manner::Stop, Voiceless, false),
    consonant(Ph, "CONSONANT_PHA", "ph", &[], "फ", Place::Labial, Manner::Stop, Voiceless, true),
    consonant(B, "CONSONANT_BA", "b", &[], "ब", Place::Labial, Manner::Stop, Voiced, false),
    consonant(Bh, "CONSONANT_BHA", "bh", &[], "भ", Place::Labial, Manner::Stop, Voiced, true),
    consonant(M, "CONSONANT_MA", "m", &[], "म", Place::Labial, Manner::Nasal, Voiced, false),
    consonant(Y, "CONSONANT_YA", "y", &[], "य", Place::Palatal, Manner::Semivowel, Voiced, false),
    consonant(R, "CONSONANT_RA", "r", &[], "र", Place::Retroflex, Manner::Semivowel, Voiced, false),
    consonant(L, "CONSONANT_LA", "l", &[], "ल", Place::Dental, Manner::Semivowel, Voiced, false),
    consonant(V, "CONSONANT_VA", "v", &[], "व", Place::Labial, Manner::Semivowel, Voiced, false),
    consonant(Sh, "CONSONANT_SHA", "ś", &[], "श", Place::Palatal, Manner::Sibilant, Voiceless, false),
    consonant(Ss, "CONSONANT_SSA", "ṣ", &[], "ष", Place::Retroflex, Manner::Sibilant, Voiceless, false),
    consonant(S, "CONSONANT_SA", "s", &[], "स", Place::Dental, Manner::Sibilant, Voiceless, false),
    consonant(H, "CONSONANT_HA", "h", &[], "ह", Place::Glottal, Manner::Fricative, Voiced, false),
    consonant(Lla, "CONSONANT_LLA", "ḻ", &["ḷ"], "ळ", Place::Retroflex, Manner::Semivowel, Voiced, false),
    consonant(Anusvara, "SIGN_ANUSVARA", "ṃ", &["ṁ"], "ं", Place::Nasal, Manner::Anusvara, Voiced, false),
    consonant(Visarga, "SIGN_VISARGA", "ḥ", &[], "ः", Place::Glottal, Manner::Visarga, Voiceless, false),
    consonant(Candrabindu, "SIGN_CANDRABINDU", "m\u{310}", &[], "ँ", Place::Nasal, Manner::Candrabindu, Voiced, false),
];
