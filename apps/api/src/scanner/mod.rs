// ATS scoring engine.
// Implements: text normalization, skill extraction, the weighted rubric, job matching.
// Pure and synchronous; no I/O. Handlers call it directly.

pub mod handlers;
pub mod normalize;
pub mod rubric;
pub mod scoring;
pub mod skills;
pub mod warnings;

use std::sync::Arc;

use regex::Regex;
use thiserror::Error;

use crate::scanner::rubric::Rubric;
use crate::scanner::skills::{build_matcher, MatchPolicy, SkillMatcher, SkillSet};
use crate::taxonomy::SkillTaxonomy;

/// Local part, `@`, domain, `.`, and a TLD of at least two letters.
const EMAIL_PATTERN: &str = r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b";

#[derive(Debug, Error)]
pub enum ScannerError {
    #[error("Unknown match policy '{0}' (expected 'whole_word' or 'substring')")]
    UnknownPolicy(String),

    #[error("Failed to compile skill patterns: {0}")]
    Pattern(#[from] regex::Error),
}

/// Scores resumes against an injected taxonomy. Built once at startup, shared via `Arc`.
pub struct AtsScanner {
    taxonomy: Arc<SkillTaxonomy>,
    matcher: Box<dyn SkillMatcher>,
    rubric: Rubric,
    email_pattern: Regex,
}

impl AtsScanner {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, policy: MatchPolicy) -> Result<Self, ScannerError> {
        Self::with_rubric(taxonomy, policy, Rubric::default())
    }

    pub fn with_rubric(
        taxonomy: Arc<SkillTaxonomy>,
        policy: MatchPolicy,
        rubric: Rubric,
    ) -> Result<Self, ScannerError> {
        let matcher = build_matcher(&taxonomy, policy)?;
        let email_pattern = Regex::new(EMAIL_PATTERN)?;
        Ok(Self {
            taxonomy,
            matcher,
            rubric,
            email_pattern,
        })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn policy(&self) -> MatchPolicy {
        self.matcher.policy()
    }

    pub fn extract_skills(&self, text: &str) -> SkillSet {
        self.matcher.extract(text)
    }

    fn has_email(&self, text: &str) -> bool {
        self.email_pattern.is_match(text)
    }
}
