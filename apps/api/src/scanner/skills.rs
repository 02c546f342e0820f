//! Skill extraction: finds which taxonomy keywords occur in a piece of text.
//!
//! Pluggable, trait-based: `AtsScanner` holds a `Box<dyn SkillMatcher>` chosen at startup
//! from `MatchPolicy`.
//!
//! - `WholeWordMatcher` (default): whole-word matching over normalized text. Skills that
//!   carry symbols (`c++`, `ci/cd`, `asp.net`) cannot survive normalization, so those are
//!   searched as substrings of the raw lowercased text instead.
//! - `SubstringMatcher`: plain substring search over lowercased text. Looser; `c` matches
//!   inside `picture`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use regex::RegexSet;
use serde::{Deserialize, Serialize};

use crate::scanner::normalize::normalize_text;
use crate::scanner::ScannerError;
use crate::taxonomy::SkillTaxonomy;

/// Matched canonical skill keywords, deduplicated and sorted.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    #[default]
    WholeWord,
    Substring,
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::WholeWord => f.write_str("whole_word"),
            MatchPolicy::Substring => f.write_str("substring"),
        }
    }
}

impl FromStr for MatchPolicy {
    type Err = ScannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "whole_word" | "word" => Ok(MatchPolicy::WholeWord),
            "substring" => Ok(MatchPolicy::Substring),
            other => Err(ScannerError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Implement this to swap matching behavior without touching the scoring rubric.
pub trait SkillMatcher: Send + Sync {
    fn policy(&self) -> MatchPolicy;

    /// Returns every taxonomy skill found in `text`. Empty text yields an empty set.
    fn extract(&self, text: &str) -> SkillSet;
}

/// Builds the matcher for `policy` over every skill in `taxonomy`.
pub fn build_matcher(
    taxonomy: &SkillTaxonomy,
    policy: MatchPolicy,
) -> Result<Box<dyn SkillMatcher>, ScannerError> {
    Ok(match policy {
        MatchPolicy::WholeWord => Box::new(WholeWordMatcher::new(taxonomy)?),
        MatchPolicy::Substring => Box::new(SubstringMatcher::new(taxonomy)),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// WholeWordMatcher
// ────────────────────────────────────────────────────────────────────────────

pub struct WholeWordMatcher {
    /// Skills made only of letters, digits, and spaces; parallel to `word_patterns`.
    word_skills: Vec<String>,
    word_patterns: RegexSet,
    /// Skills containing symbols, looked up in the raw lowercased text.
    symbol_skills: Vec<String>,
}

impl WholeWordMatcher {
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self, ScannerError> {
        let (word_skills, symbol_skills): (Vec<String>, Vec<String>) = taxonomy
            .skills()
            .map(str::to_string)
            .partition(|s| is_plain_word(s));

        let word_patterns = RegexSet::new(
            word_skills
                .iter()
                .map(|s| format!(r"\b{}\b", regex::escape(s))),
        )?;

        Ok(Self {
            word_skills,
            word_patterns,
            symbol_skills,
        })
    }
}

impl SkillMatcher for WholeWordMatcher {
    fn policy(&self) -> MatchPolicy {
        MatchPolicy::WholeWord
    }

    fn extract(&self, text: &str) -> SkillSet {
        if text.is_empty() {
            return SkillSet::new();
        }

        let normalized = normalize_text(text);
        let mut found: SkillSet = self
            .word_patterns
            .matches(&normalized)
            .into_iter()
            .map(|i| self.word_skills[i].clone())
            .collect();

        let lowered = text.to_lowercase();
        found.extend(
            self.symbol_skills
                .iter()
                .filter(|s| lowered.contains(s.as_str()))
                .cloned(),
        );

        found
    }
}

fn is_plain_word(skill: &str) -> bool {
    skill
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
}

// ────────────────────────────────────────────────────────────────────────────
// SubstringMatcher
// ────────────────────────────────────────────────────────────────────────────

pub struct SubstringMatcher {
    skills: Vec<String>,
}

impl SubstringMatcher {
    pub fn new(taxonomy: &SkillTaxonomy) -> Self {
        Self {
            skills: taxonomy.skills().map(str::to_string).collect(),
        }
    }
}

impl SkillMatcher for SubstringMatcher {
    fn policy(&self) -> MatchPolicy {
        MatchPolicy::Substring
    }

    fn extract(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        self.skills
            .iter()
            .filter(|s| lowered.contains(s.as_str()))
            .cloned()
            .collect()
    }
}
