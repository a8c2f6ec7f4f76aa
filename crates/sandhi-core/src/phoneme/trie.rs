use std::collections::HashMap;
use std::sync::OnceLock;

use super::{Mark, PhonemeId, PHONEMES};
use crate::script::ScriptKind;
use crate::settings::{settings, RenderSettings};

/// What a surface spelling stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Phoneme(PhonemeId),
    Mark(Mark),
}

/// How a surface spelling relates to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceForm {
    /// Any IAST spelling.
    Iast,
    /// Independent vowel letter.
    Independent,
    /// Dependent vowel sign (mātrā).
    Matra,
    /// Bare consonant letter, carrying an inherent `a` unless a virāma or
    /// mātrā follows.
    Consonant,
    /// Anusvāra, visarga, candrabindu, or a mark.
    Sign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub target: Target,
    pub form: SurfaceForm,
}

struct Node {
    children: HashMap<char, Node>,
    entry: Option<Entry>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            entry: None,
        }
    }
}

/// Char-keyed trie over the spellings of one script.
///
/// Only the spellings the renderer emits are present, so whatever the trie
/// recognizes renders back to the same text. Case variants, decomposed
/// input and alternate spellings go through [`crate::normalize::fold_iast`]
/// first.
pub struct SurfaceTrie {
    root: Node,
}

impl SurfaceTrie {
    /// The IAST trie for the global render settings.
    pub fn iast() -> &'static SurfaceTrie {
        Self::iast_spelled(&settings().render)
    }

    /// The IAST trie whose anusvāra spelling is `spelling.iast_anusvara`.
    pub fn iast_spelled(spelling: &RenderSettings) -> &'static SurfaceTrie {
        static DOT_BELOW: OnceLock<SurfaceTrie> = OnceLock::new();
        static DOT_ABOVE: OnceLock<SurfaceTrie> = OnceLock::new();
        let cell = if spelling.iast_anusvara == PhonemeId::Anusvara.phoneme().iast {
            &DOT_BELOW
        } else {
            &DOT_ABOVE
        };
        cell.get_or_init(|| build_iast(&spelling.iast_anusvara))
    }

    /// Get or initialize the Devanagari trie.
    pub fn devanagari() -> &'static SurfaceTrie {
        static INSTANCE: OnceLock<SurfaceTrie> = OnceLock::new();
        INSTANCE.get_or_init(build_devanagari)
    }

    pub fn for_script(script: ScriptKind) -> Option<&'static SurfaceTrie> {
        Self::for_script_spelled(script, &settings().render)
    }

    pub fn for_script_spelled(
        script: ScriptKind,
        spelling: &RenderSettings,
    ) -> Option<&'static SurfaceTrie> {
        match script {
            ScriptKind::Iast => Some(Self::iast_spelled(spelling)),
            ScriptKind::Devanagari => Some(Self::devanagari()),
            ScriptKind::Unknown => None,
        }
    }

    /// Longest spelling that is a prefix of `text`, as (byte length, entry).
    pub fn longest_match(&self, text: &str) -> Option<(usize, Entry)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in text.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(entry) = node.entry {
                best = Some((i + c.len_utf8(), entry));
            }
        }
        best
    }

    /// Exact lookup of a complete spelling.
    pub fn lookup(&self, surface: &str) -> Option<Entry> {
        let mut node = &self.root;
        for c in surface.chars() {
            node = node.children.get(&c)?;
        }
        node.entry
    }

    fn empty() -> Self {
        Self { root: Node::new() }
    }

    fn insert(&mut self, surface: &str, entry: Entry) {
        let mut node = &mut self.root;
        for c in surface.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        node.entry = Some(entry);
    }
}

fn build_iast(anusvara: &str) -> SurfaceTrie {
    let mut trie = SurfaceTrie::empty();
    for p in PHONEMES {
        let spelling = if p.id == PhonemeId::Anusvara {
            anusvara
        } else {
            p.iast
        };
        trie.insert(
            spelling,
            Entry {
                target: Target::Phoneme(p.id),
                form: SurfaceForm::Iast,
            },
        );
    }
    for mark in Mark::all() {
        trie.insert(
            mark.iast(),
            Entry {
                target: Target::Mark(mark),
                form: SurfaceForm::Sign,
            },
        );
    }
    trie
}

fn build_devanagari() -> SurfaceTrie {
    let mut trie = SurfaceTrie::empty();
    for p in PHONEMES {
        if let Some(letter) = p.devanagari {
            let form = if p.is_vowel() {
                SurfaceForm::Independent
            } else if p.is_sign() {
                SurfaceForm::Sign
            } else {
                SurfaceForm::Consonant
            };
            trie.insert(
                letter,
                Entry {
                    target: Target::Phoneme(p.id),
                    form,
                },
            );
        }
        if let Some(matra) = p.matra {
            trie.insert(
                matra,
                Entry {
                    target: Target::Phoneme(p.id),
                    form: SurfaceForm::Matra,
                },
            );
        }
    }
    for mark in Mark::all() {
        trie.insert(
            mark.devanagari(),
            Entry {
                target: Target::Mark(mark),
                form: SurfaceForm::Sign,
            },
        );
    }
    trie
}
