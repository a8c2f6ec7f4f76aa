
use crate::normalize::{CanonicalSequence, Unit};
use crate::phoneme::{Mark, PhonemeId};

/// Canonical sequence built from phonemes, marks and single spaces.
pub(super) fn canonical(units: &[Unit]) -> CanonicalSequence {
    units.iter().cloned().collect()
}

pub(super) fn phonemes(ids: &[PhonemeId]) -> CanonicalSequence {
    ids.iter().copied().collect()
}

pub(super) fn space() -> Unit {
    Unit::Separator(" ".to_string())
}

pub(super) fn digit(d: u8) -> Unit {
    Unit::Mark(Mark::Digit(d))
}
