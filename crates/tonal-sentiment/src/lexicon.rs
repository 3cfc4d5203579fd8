//! Built-in English word lists for [`crate::PatternScorer`].
//!
//! Each sentiment entry is `(word, polarity, subjectivity)`. Values follow
//! the usual pattern-lexicon conventions: strong evaluative adjectives near
//! the ends of the polarity range and high subjectivity, descriptive words
//! closer to zero.

pub(crate) const WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("congrats", 0.6, 0.8),
    ("congratulations", 0.6, 0.8),
    ("cool", 0.35, 0.65),
    ("delighted", 0.7, 1.0),
    ("easy", 0.43, 0.83),
    ("enjoy", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.4, 0.8),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.42, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("like", 0.2, 0.3),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("lucky", 0.33, 1.0),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.5, 1.0),
    ("proud", 0.8, 1.0),
    ("recommend", 0.3, 0.4),
    ("safe", 0.5, 0.5),
    ("smart", 0.21, 0.64),
    ("strong", 0.43, 0.73),
    ("success", 0.3, 0.3),
    ("successful", 0.75, 0.95),
    ("thank", 0.2, 0.2),
    ("thanks", 0.2, 0.2),
    ("win", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    ("wow", 0.1, 1.0),
    // negative
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("crazy", -0.6, 0.9),
    ("dangerous", -0.6, 0.9),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dumb", -0.38, 0.5),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("hard", -0.29, 0.54),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("hurt", -0.5, 0.5),
    ("lost", -0.2, 0.3),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("scary", -0.5, 1.0),
    ("sick", -0.71, 0.86),
    ("slow", -0.3, 0.39),
    ("sorry", -0.5, 1.0),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("upset", -0.6, 0.8),
    ("useless", -0.5, 0.2),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Words that flip the next sentiment word.
pub(crate) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nobody", "nothing", "none", "cannot", "hardly",
    "barely", "without",
];

/// Words that scale the next sentiment word.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.4),
    ("super", 1.3),
    ("too", 1.2),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("slightly", 0.7),
    ("somewhat", 0.8),
    ("kinda", 0.8),
];
