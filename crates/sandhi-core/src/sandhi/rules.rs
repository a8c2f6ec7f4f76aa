use crate::classify::{
    guna_of, homorganic_nasal, is_ik_vowel, is_vowel, lengthened, savarna, semivowel_of,
    vrddhi_of,
};
use crate::normalize::Unit;
use crate::phoneme::{PhonemeId, Voicing};
use crate::settings::{NasalAssimilation, VelarSibilant};

use super::{Boundary, SandhiRuleName, Splice};

use PhonemeId::*;

/// One rewrite at a morpheme boundary.
pub(crate) trait SandhiRule: Sync {
    fn name(&self) -> SandhiRuleName;

    /// The seam rewrite, or `None` when the predicate does not hold.
    fn apply(&self, boundary: &Boundary<'_>) -> Option<Splice>;
}

/// Rules in priority order; the first match wins.
pub(crate) static RULES: &[&dyn SandhiRule] = &[
    &LexicalExceptionRule,
    &AnusvaraRule,
    &SchutvaRule,
    &SavarnaDirghaRule,
    &GunaRule,
    &VrddhiRule,
    &YanRule,
    &VisargaRule,
    &AyadiRule,
];

fn seam(left_drop: usize, right_drop: usize, insert: Vec<PhonemeId>) -> Option<Splice> {
    Some(Splice {
        left_drop,
        right_drop,
        insert,
    })
}

fn is_consonant_letter(id: PhonemeId) -> bool {
    id.phoneme().is_consonant_letter()
}

/// Whole-morpheme pairs listed in the exception table.
struct LexicalExceptionRule;

impl SandhiRule for LexicalExceptionRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::LexicalException
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        let left = phonemes_only(b.left)?;
        let right = phonemes_only(b.right)?;
        let result = b.exceptions.lookup(&left, &right)?;
        seam(left.len(), right.len(), result.to_vec())
    }
}

/// Every unit as a phoneme, or `None` if any unit is not one.
fn phonemes_only(units: &[Unit]) -> Option<Vec<PhonemeId>> {
    units.iter().map(Unit::phoneme_id).collect()
}

struct AnusvaraRule;

impl SandhiRule for AnusvaraRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::Anusvara
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        let next = b.first().filter(|&c| is_consonant_letter(c))?;
        if !matches!(b.last()?, Ng | Ny | Nn | N | M) {
            return None;
        }
        let nasal = match b.settings.sandhi.nasal_assimilation {
            NasalAssimilation::Anusvara => PhonemeId::Anusvara,
            NasalAssimilation::Homorganic => {
                homorganic_nasal(next).unwrap_or(PhonemeId::Anusvara)
            }
        };
        seam(1, 0, vec![nasal])
    }
}

struct SchutvaRule;

impl SandhiRule for SchutvaRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::Schutva
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        if b.last()? != S {
            return None;
        }
        let sibilant = match (b.first()?, b.settings.sandhi.velar_sibilant) {
            (C | Ch, _) | (K | Kh, VelarSibilant::Palatal) => Sh,
            (K | Kh, VelarSibilant::Retroflex) => Ss,
            _ => return None,
        };
        seam(1, 0, vec![sibilant])
    }
}

struct SavarnaDirghaRule;

impl SandhiRule for SavarnaDirghaRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::SavarnaDirgha
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        let (last, first) = (b.last()?, b.first()?);
        if !savarna(last, first) {
            return None;
        }
        seam(1, 1, vec![lengthened(last)?])
    }
}

struct GunaRule;

impl SandhiRule for GunaRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::Guna
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        let (last, first) = (b.last()?, b.first()?);
        if !matches!(last, A | Aa) || !is_ik_vowel(first) {
            return None;
        }
        seam(1, 1, guna_of(first)?.to_vec())
    }
}

struct VrddhiRule;

impl SandhiRule for VrddhiRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::Vrddhi
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        let (last, first) = (b.last()?, b.first()?);
        if !matches!(last, A | Aa) || !matches!(first, E | Ai | O | Au) {
            return None;
        }
        seam(1, 1, vrddhi_of(first)?.to_vec())
    }
}

struct YanRule;

impl SandhiRule for YanRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::Yan
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        let (last, first) = (b.last()?, b.first()?);
        if !is_ik_vowel(last) || !is_vowel(first) || savarna(last, first) {
            return None;
        }
        seam(1, 1, vec![semivowel_of(last)?, first])
    }
}

struct AyadiRule;

impl SandhiRule for AyadiRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::Ayadi
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        let (last, first) = (b.last()?, b.first()?);
        if !is_vowel(first) {
            return None;
        }
        let (vowel, glide) = match last {
            E => (A, Y),
            Ai => (Aa, Y),
            O => (A, V),
            Au => (Aa, V),
            _ => return None,
        };
        seam(1, 1, vec![vowel, glide, first])
    }
}

struct VisargaRule;

impl SandhiRule for VisargaRule {
    fn name(&self) -> SandhiRuleName {
        SandhiRuleName::Visarga
    }

    fn apply(&self, b: &Boundary<'_>) -> Option<Splice> {
        if b.last_two()? != (A, Visarga) {
            return None;
        }
        let first = b.first()?;
        let voiced = first
            .phoneme()
            .features
            .is_some_and(|f| f.voicing == Voicing::Voiced);
        if !is_consonant_letter(first) || !voiced {
            return None;
        }
        seam(2, 0, vec![O])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_list_matches_rule_names() {
        let names: Vec<SandhiRuleName> = RULES.iter().map(|r| r.name()).collect();
        assert_eq!(names, SandhiRuleName::ALL.to_vec());
    }
}
