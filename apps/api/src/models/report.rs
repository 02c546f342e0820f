use serde::{Deserialize, Serialize};

use crate::scanner::skills::{MatchPolicy, SkillSet};

/// Which analysis the caller asked for. A request parameter only; scoring is the same
/// pure function either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Baseline,
    JobMatch,
}

impl AnalysisMode {
    /// `requested` wins; otherwise job matching runs whenever a job description was sent.
    pub fn resolve(requested: Option<AnalysisMode>, has_job_description: bool) -> Self {
        match requested {
            Some(mode) => mode,
            None if has_job_description => AnalysisMode::JobMatch,
            None => AnalysisMode::Baseline,
        }
    }
}

/// Format heuristics that are evaluated and reported but currently add no points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatSignals {
    pub has_table_delimiters: bool,
    pub has_bullets: bool,
    pub has_email_chars: bool,
    pub has_social_links: bool,
}

/// Per-component view of the rubric, for transparency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,   // 0 – 45
    pub section_score: f64, // 0 – 25
    pub length_score: f64,  // 5 | 10 | 15
    pub format_score: f64,  // 10 | 15
    pub word_count: usize,
    pub sections_found: Vec<String>,
    pub format_signals: FormatSignals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub category: String,
    pub detected: Vec<String>,
    pub detected_count: usize,
    pub total: usize,
}

/// Skills the job description asks for, split by whether the resume has them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSkillGap {
    pub required_skills: SkillSet,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
}

/// Everything one scoring call produces. Built fresh per request, never mutated after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64, // 0 – 100, two decimals
    pub detected_skills: SkillSet,
    pub missing_skills: SkillSet,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_match: Option<JobSkillGap>,
    pub breakdown: ScoreBreakdown,
    pub skills_by_category: Vec<CategoryCoverage>,
    pub mode: AnalysisMode,
    pub match_policy: MatchPolicy,
}
