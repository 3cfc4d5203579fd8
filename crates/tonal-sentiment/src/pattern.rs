//! Lexicon-based polarity and subjectivity scorer.

use std::collections::{HashMap, HashSet};

use tonal_core::entities::SentimentSample;

use crate::lexicon::{INTENSIFIERS, NEGATIONS, WORDS};
use crate::{ScoreError, SentimentScorer};

/// Polarity multiplier applied to a negated sentiment word.
const NEGATION_FACTOR: f64 = -0.5;

/// Polarity multiplier for a sentiment word followed by `!`.
const EXCLAMATION_FACTOR: f64 = 1.25;

/// Scores text by averaging the lexicon entries of the sentiment words it
/// contains.
///
/// A negation before a sentiment word multiplies its polarity by `-0.5`; an
/// intensifier scales both polarity and subjectivity. Both apply to the next
/// sentiment word in the same clause. URLs, `@mentions` and the `RT` marker
/// are ignored; hashtags are read as plain words.
pub struct PatternScorer {
    words: HashMap<String, (f64, f64)>,
    negations: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

impl Default for PatternScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Token {
    word: String,
    exclaim: bool,
    clause_end: bool,
}

impl PatternScorer {
    /// Scorer with the built-in English lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: WORDS
                .iter()
                .map(|(w, p, s)| ((*w).to_string(), (*p, *s)))
                .collect(),
            negations: NEGATIONS.iter().map(|w| (*w).to_string()).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| ((*w).to_string(), *m))
                .collect(),
        }
    }

    /// Add or replace a lexicon entry.
    #[must_use]
    pub fn with_entry(mut self, word: &str, polarity: f64, subjectivity: f64) -> Self {
        self.words.insert(
            word.to_lowercase(),
            (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)),
        );
        self
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    fn assess(&self, tokens: &[Token]) -> Vec<(f64, f64)> {
        let mut assessments = Vec::new();
        let mut negate = false;
        let mut intensity = 1.0;

        for token in tokens {
            if self.is_negation(&token.word) {
                negate = true;
            } else if let Some(multiplier) = self.intensifiers.get(&token.word) {
                intensity *= multiplier;
            } else if let Some(&(polarity, subjectivity)) = self.words.get(&token.word) {
                let mut polarity = polarity * intensity;
                if negate {
                    polarity *= NEGATION_FACTOR;
                }
                if token.exclaim {
                    polarity *= EXCLAMATION_FACTOR;
                }
                assessments.push((
                    polarity.clamp(-1.0, 1.0),
                    (subjectivity * intensity).clamp(0.0, 1.0),
                ));
                negate = false;
                intensity = 1.0;
            }

            if token.clause_end {
                negate = false;
                intensity = 1.0;
            }
        }

        assessments
    }
}

impl SentimentScorer for PatternScorer {
    fn score(&self, text: &str) -> Result<SentimentSample, ScoreError> {
        if text.trim().is_empty() {
            return Err(ScoreError::EmptyText);
        }

        let assessments = self.assess(&tokenize(text));
        if assessments.is_empty() {
            return Ok(SentimentSample::NEUTRAL);
        }

        #[allow(clippy::cast_precision_loss)]
        let n = assessments.len() as f64;
        let (polarity, subjectivity) = assessments
            .iter()
            .fold((0.0_f64, 0.0_f64), |(p, s), &(ap, sv)| (p + ap, s + sv));
        Ok(SentimentSample::clamped(polarity / n, subjectivity / n))
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter(|raw| !is_noise(raw))
        .filter_map(|raw| {
            let word = raw
                .replace('\u{2019}', "'")
                .trim_matches(|c: char| !(c.is_alphanumeric() || c == '\''))
                .to_lowercase();
            let clause_end = raw.ends_with(['.', ',', ';', ':', '!', '?']);
            if word.is_empty() || word == "rt" {
                // Punctuation-only tokens still close a clause.
                return clause_end.then(|| Token {
                    word: String::new(),
                    exclaim: false,
                    clause_end,
                });
            }
            Some(Token {
                word,
                exclaim: raw.contains('!'),
                clause_end,
            })
        })
        .collect()
}

fn is_noise(raw: &str) -> bool {
    raw.starts_with('@') || raw.starts_with("http://") || raw.starts_with("https://")
}
