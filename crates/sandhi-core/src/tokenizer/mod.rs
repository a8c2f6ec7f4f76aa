//! Longest-match segmentation of text into phoneme tokens.
//!
//! Tokenization is total and lossless: every character ends up in exactly
//! one token, and concatenating token surfaces reproduces the input. In
//! Devanagari a bare consonant letter is followed by an inherent-`a` token
//! with an empty surface unless a virāma or mātrā comes next.
//!
//! Only spellings the renderer itself produces are recognized: a mātrā
//! away from a bare consonant, or an independent vowel right after a
//! virāma, is `Unrecognized`. Anything recognized therefore renders back
//! to the same text.


use serde::Serialize;
use tracing::{debug, debug_span};

use crate::error::EngineError;
use crate::phoneme::{Entry, Mark, Phoneme, PhonemeId, SurfaceForm, SurfaceTrie, Target};
use crate::script::ScriptKind;
use crate::settings::{settings, RenderSettings};
use crate::unicode::{is_separator, VIRAMA};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenKind {
    Phoneme(PhonemeId),
    Mark(Mark),
    /// Whitespace or punctuation, passed through.
    Separator,
    /// A character outside both inventories, passed through.
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub surface: String,
    pub script: ScriptKind,
    /// Byte offset of `surface` in the tokenized text.
    pub offset: usize,
}

impl Token {
    pub fn phoneme_id(&self) -> Option<PhonemeId> {
        match self.kind {
            TokenKind::Phoneme(id) => Some(id),
            _ => None,
        }
    }

    pub fn phoneme(&self) -> Option<&'static Phoneme> {
        self.phoneme_id().map(PhonemeId::phoneme)
    }

    pub fn is_unrecognized(&self) -> bool {
        self.kind == TokenKind::Unrecognized
    }

    /// The implicit `a` after a bare Devanagari consonant.
    pub fn is_inherent(&self) -> bool {
        self.surface.is_empty() && self.kind == TokenKind::Phoneme(PhonemeId::A)
    }
}

/// Tokens of one text, in order, all in the same script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSequence {
    script: ScriptKind,
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub(crate) fn from_tokens(script: ScriptKind, tokens: Vec<Token>) -> Self {
        Self { script, tokens }
    }

    pub fn script(&self) -> ScriptKind {
        self.script
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Concatenated surfaces; equals the tokenized text.
    pub fn surface(&self) -> String {
        self.tokens.iter().map(|t| t.surface.as_str()).collect()
    }

    pub fn phonemes(&self) -> impl Iterator<Item = PhonemeId> + '_ {
        self.tokens.iter().filter_map(Token::phoneme_id)
    }

    pub fn unrecognized_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_unrecognized()).count()
    }

    pub fn has_unrecognized(&self) -> bool {
        self.tokens.iter().any(Token::is_unrecognized)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("cannot tokenize without a definite script")]
    UnknownScript,
}

impl From<TokenizeError> for EngineError {
    fn from(e: TokenizeError) -> Self {
        match e {
            TokenizeError::UnknownScript => EngineError::UnknownScript,
        }
    }
}

/// Segment `text` into tokens of `script`.
///
/// At each position the longest spelling known to the script's trie wins.
/// Characters with no spelling become `Separator` or `Unrecognized` tokens.
/// IAST anusvāra is read in the globally configured spelling.
pub fn tokenize(text: &str, script: ScriptKind) -> Result<TokenSequence, TokenizeError> {
    tokenize_spelled(text, script, &settings().render)
}

/// [`tokenize`] reading IAST anusvāra as `spelling.iast_anusvara`.
pub fn tokenize_spelled(
    text: &str,
    script: ScriptKind,
    spelling: &RenderSettings,
) -> Result<TokenSequence, TokenizeError> {
    let trie = SurfaceTrie::for_script_spelled(script, spelling)
        .ok_or(TokenizeError::UnknownScript)?;
    let _span = debug_span!("tokenize", %script, bytes = text.len()).entered();

    let mut scanner = Scanner {
        text,
        script,
        trie,
        tokens: Vec::new(),
        bare_consonant_end: None,
        virama_end: None,
    };
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        pos = match trie.longest_match(rest) {
            Some((len, entry)) => scanner.push_match(pos, len, entry),
            None => {
                let Some(c) = rest.chars().next() else {
                    break;
                };
                let kind = if is_separator(c) {
                    TokenKind::Separator
                } else {
                    TokenKind::Unrecognized
                };
                scanner.push(kind, pos, pos + c.len_utf8())
            }
        };
    }

    let sequence = TokenSequence::from_tokens(script, scanner.tokens);
    debug!(
        token_count = sequence.len(),
        unrecognized = sequence.unrecognized_count()
    );
    Ok(sequence)
}

struct Scanner<'a> {
    text: &'a str,
    script: ScriptKind,
    trie: &'static SurfaceTrie,
    tokens: Vec<Token>,
    /// End offset of the last consonant pushed without virāma; a mātrā is
    /// only valid right there.
    bare_consonant_end: Option<usize>,
    /// End offset of the last consonant + virāma.
    virama_end: Option<usize>,
}

impl Scanner<'_> {
    /// Push a token spanning `start..end`, returning `end`.
    fn push(&mut self, kind: TokenKind, start: usize, end: usize) -> usize {
        self.tokens.push(Token {
            kind,
            surface: self.text[start..end].to_string(),
            script: self.script,
            offset: start,
        });
        end
    }

    fn push_match(&mut self, start: usize, len: usize, entry: Entry) -> usize {
        let kind = match entry.target {
            Target::Phoneme(id) => TokenKind::Phoneme(id),
            Target::Mark(mark) => TokenKind::Mark(mark),
        };
        let end = start + len;
        match entry.form {
            SurfaceForm::Consonant => {}
            SurfaceForm::Matra if self.bare_consonant_end != Some(start) => {
                return self.push(TokenKind::Unrecognized, start, end);
            }
            // क्अ: a vowel letter cannot follow a dead consonant.
            SurfaceForm::Independent if self.virama_end == Some(start) => {
                return self.push(TokenKind::Unrecognized, start, end);
            }
            _ => return self.push(kind, start, end),
        }

        let after = &self.text[end..];
        if after.starts_with(VIRAMA) {
            let end = self.push(kind, start, end + VIRAMA.len_utf8());
            self.virama_end = Some(end);
            return end;
        }
        let end = self.push(kind, start, end);
        self.bare_consonant_end = Some(end);
        let matra_follows = matches!(
            self.trie.longest_match(after),
            Some((
                _,
                Entry {
                    form: SurfaceForm::Matra,
                    ..
                }
            ))
        );
        if !matra_follows {
            self.push(TokenKind::Phoneme(PhonemeId::A), end, end);
        }
        end
    }
}
