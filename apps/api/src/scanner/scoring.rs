//! ATS scoring: the weighted rubric and its job-description matching extension.
//!
//! Baseline rubric (weights sum to 100):
//! 1. Skill coverage (45): share of all taxonomy skills found in the resume
//! 2. Sections (25): share of the checklist terms present in the lowercased resume
//! 3. Length (15 / 10 / 5): by word-count band
//! 4. Format (15): minus 5 when table delimiters appear
//!
//! Total = sum, rounded to two decimals, clamped to [0, 100].

use tracing::debug;

use crate::models::report::{AnalysisMode, CategoryCoverage, JobSkillGap, ScoreBreakdown, ScoreResult};
use crate::scanner::normalize::word_count;
use crate::scanner::skills::SkillSet;
use crate::scanner::warnings::{job_match_warning, AtsWarning};
use crate::scanner::AtsScanner;

impl AtsScanner {
    /// Dispatches on `mode`. Job matching without a job description scores against an
    /// empty one, which yields a zero match and an explanatory warning.
    pub fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
        mode: AnalysisMode,
    ) -> ScoreResult {
        match mode {
            AnalysisMode::Baseline => self.baseline_score(resume_text),
            AnalysisMode::JobMatch => {
                self.job_match_score(resume_text, job_description.unwrap_or_default())
            }
        }
    }

    /// Scores a resume on its own, without a job description.
    pub fn baseline_score(&self, resume_text: &str) -> ScoreResult {
        let rubric = &self.rubric;
        let lowered = resume_text.to_lowercase();
        let detected = self.extract_skills(resume_text);
        let all_skills = self.taxonomy.all_skills();
        let words = word_count(&lowered);

        let skill_score = rubric.skill_score(detected.len(), all_skills.len());
        let (section_score, sections_found) = rubric.section_score(&lowered);
        let length_score = rubric.length.score(words);
        let (format_score, format_signals) = rubric.format_score(resume_text, &lowered);

        let total = round2(skill_score + section_score + length_score + format_score);
        let score = total.clamp(0.0, 100.0);

        let mut warnings = Vec::new();
        if format_signals.has_table_delimiters {
            warnings.push(AtsWarning::AvoidTables);
        }
        if words < rubric.length.acceptable_min {
            warnings.push(AtsWarning::TooShort {
                ideal_min: rubric.length.ideal_min,
                ideal_max: rubric.length.ideal_max,
            });
        }
        if words > rubric.length.acceptable_max {
            warnings.push(AtsWarning::TooLong {
                ideal_min: rubric.length.ideal_min,
                ideal_max: rubric.length.ideal_max,
            });
        }
        if detected.len() < rubric.min_skills {
            warnings.push(AtsWarning::AddMoreSkills);
        }
        if !lowered.contains("experience") {
            warnings.push(AtsWarning::MissingExperience);
        }
        if !lowered.contains("education") {
            warnings.push(AtsWarning::MissingEducation);
        }
        if !self.has_email(resume_text) {
            warnings.push(AtsWarning::MissingEmail);
        }

        debug!(
            score,
            words,
            detected = detected.len(),
            warnings = warnings.len(),
            "Baseline ATS score computed"
        );

        let skills_by_category = self.category_coverage(&detected);
        let missing_skills: SkillSet = all_skills.difference(&detected).cloned().collect();

        ScoreResult {
            score,
            detected_skills: detected,
            missing_skills,
            warnings: warnings.iter().map(ToString::to_string).collect(),
            match_percentage: None,
            job_match: None,
            breakdown: ScoreBreakdown {
                skill_score: round2(skill_score),
                section_score: round2(section_score),
                length_score,
                format_score,
                word_count: words,
                sections_found,
                format_signals,
            },
            skills_by_category,
            mode: AnalysisMode::Baseline,
            match_policy: self.policy(),
        }
    }

    /// Baseline score plus the share of job-description skills the resume covers.
    pub fn job_match_score(&self, resume_text: &str, job_description: &str) -> ScoreResult {
        let mut result = self.baseline_score(resume_text);
        let required = self.extract_skills(job_description);

        let (match_percentage, extra_warning) = if required.is_empty() {
            (0.0, Some(AtsWarning::NoJobSkills))
        } else {
            let matched = required.intersection(&result.detected_skills).count();
            let pct = round2(100.0 * matched as f64 / required.len() as f64);
            (pct, job_match_warning(pct))
        };

        if let Some(warning) = extra_warning {
            result.warnings.push(warning.to_string());
        }

        let matched_skills: SkillSet = required
            .intersection(&result.detected_skills)
            .cloned()
            .collect();
        let missing_skills: SkillSet = required.difference(&matched_skills).cloned().collect();

        debug!(
            match_percentage,
            required = required.len(),
            matched = matched_skills.len(),
            "Job match computed"
        );

        result.match_percentage = Some(match_percentage.clamp(0.0, 100.0));
        result.job_match = Some(JobSkillGap {
            required_skills: required,
            matched_skills,
            missing_skills,
        });
        result.mode = AnalysisMode::JobMatch;
        result
    }

    /// Regroups the flat detected set by category. Categories keep taxonomy order;
    /// skills inside each one stay sorted.
    fn category_coverage(&self, detected: &SkillSet) -> Vec<CategoryCoverage> {
        let mut coverage: Vec<CategoryCoverage> = self
            .taxonomy
            .categories()
            .iter()
            .map(|category| CategoryCoverage {
                category: category.name.clone(),
                detected: Vec::new(),
                detected_count: 0,
                total: category.skills.len(),
            })
            .collect();

        for skill in detected {
            let Some(name) = self.taxonomy.category_of(skill) else {
                continue;
            };
            if let Some(entry) = coverage.iter_mut().find(|c| c.category == name) {
                entry.detected.push(skill.clone());
                entry.detected_count += 1;
            }
        }

        coverage
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::scanner::rubric::{LengthBands, Rubric};
    use crate::scanner::skills::MatchPolicy;
    use crate::taxonomy::{software_taxonomy, SkillTaxonomy};

    fn scanner() -> AtsScanner {
        AtsScanner::new(Arc::new(software_taxonomy().unwrap()), MatchPolicy::WholeWord).unwrap()
    }

    fn small_scanner() -> AtsScanner {
        let taxonomy = SkillTaxonomy::new(vec![
            ("languages", vec!["python", "java", "rust"]),
            ("tools", vec!["docker", "kubernetes", "terraform", "git"]),
        ])
        .unwrap();
        AtsScanner::new(Arc::new(taxonomy), MatchPolicy::WholeWord).unwrap()
    }

    fn filler(words: usize) -> String {
        vec!["lorem"; words].join(" ")
    }

    fn has_warning(result: &ScoreResult, warning: AtsWarning) -> bool {
        result.warnings.contains(&warning.to_string())
    }

    #[test]
    fn test_empty_resume_fires_every_content_warning() {
        let result = scanner().baseline_score("");

        // skills 0 + sections 0 + length 5 + format 15
        assert_eq!(result.score, 20.0);
        assert!(result.detected_skills.is_empty());
        assert_eq!(result.breakdown.word_count, 0);
        assert_eq!(result.breakdown.skill_score, 0.0);
        assert_eq!(result.breakdown.length_score, 5.0);
        assert_eq!(
            result.warnings,
            vec![
                AtsWarning::TooShort { ideal_min: 350, ideal_max: 900 }.to_string(),
                AtsWarning::AddMoreSkills.to_string(),
                AtsWarning::MissingExperience.to_string(),
                AtsWarning::MissingEducation.to_string(),
                AtsWarning::MissingEmail.to_string(),
            ]
        );
    }

    #[test]
    fn test_short_resume_with_contact_and_sections() {
        let text = "I have 5 years experience in python, java, and docker. \
                    Education: BS Computer Science. Contact: foo@bar.com";
        let result = scanner().baseline_score(text);

        for skill in ["python", "java", "docker"] {
            assert!(result.detected_skills.contains(skill), "missing {skill}");
        }
        assert!(has_warning(
            &result,
            AtsWarning::TooShort { ideal_min: 350, ideal_max: 900 }
        ));
        assert!(!has_warning(&result, AtsWarning::MissingEmail));
        assert!(!has_warning(&result, AtsWarning::MissingExperience));
        assert!(!has_warning(&result, AtsWarning::MissingEducation));
        assert!(!has_warning(&result, AtsWarning::AvoidTables));
    }

    #[test]
    fn test_ideal_length_with_table_delimiter() {
        let text = format!("{} |", filler(499));
        let result = scanner().baseline_score(&text);

        assert_eq!(result.breakdown.word_count, 500);
        assert_eq!(result.breakdown.length_score, 15.0);
        assert_eq!(result.breakdown.format_score, 10.0);
        assert_eq!(result.warnings[0], AtsWarning::AvoidTables.to_string());
        assert!(!result
            .warnings
            .iter()
            .any(|w| w.contains("too short") || w.contains("too long")));
    }

    #[test]
    fn test_box_drawing_bar_counts_as_table() {
        let result = scanner().baseline_score("Skills │ Python");
        assert!(has_warning(&result, AtsWarning::AvoidTables));
        assert!(result.breakdown.format_signals.has_table_delimiters);
    }

    #[test]
    fn test_long_resume_warns() {
        let result = scanner().baseline_score(&filler(1001));
        assert_eq!(result.breakdown.length_score, 5.0);
        assert!(has_warning(
            &result,
            AtsWarning::TooLong { ideal_min: 350, ideal_max: 900 }
        ));
    }

    #[test]
    fn test_partial_length_band() {
        let result = scanner().baseline_score(&filler(300));
        assert_eq!(result.breakdown.length_score, 10.0);
        assert!(!result.warnings.iter().any(|w| w.contains("too short")));
    }

    #[test]
    fn test_missing_is_complement_of_detected() {
        let s = scanner();
        let result = s.baseline_score("Rust, Go, Kubernetes, PostgreSQL and C++ on Linux");
        let all = s.taxonomy().all_skills();

        assert!(result.detected_skills.is_disjoint(&result.missing_skills));
        let union: SkillSet = result
            .detected_skills
            .union(&result.missing_skills)
            .cloned()
            .collect();
        assert_eq!(union, all);
    }

    #[test]
    fn test_skill_score_uses_full_taxonomy_size() {
        let result = small_scanner().baseline_score("python rust");
        // 45 * 2 / 7
        assert_eq!(result.breakdown.skill_score, 12.86);
    }

    #[test]
    fn test_score_is_rounded_and_bounded() {
        let s = small_scanner();
        let text = format!(
            "experience education projects skills github certifications \
             python java rust docker kubernetes terraform git me@mail.com {}",
            filler(400)
        );
        let result = s.baseline_score(&text);
        assert_eq!(result.score, 100.0);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);

        let long = filler(2000);
        for text in ["", "|", "python", long.as_str()] {
            let score = s.baseline_score(text).score;
            assert!((0.0..=100.0).contains(&score));
            assert_eq!(score, round2(score));
        }
    }

    #[test]
    fn test_empty_taxonomy_scores_without_skills() {
        let taxonomy = SkillTaxonomy::new(Vec::<(&str, Vec<&str>)>::new()).unwrap();
        let s = AtsScanner::new(Arc::new(taxonomy), MatchPolicy::WholeWord).unwrap();
        let result = s.baseline_score("python experience");
        assert_eq!(result.breakdown.skill_score, 0.0);
        assert!(result.detected_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.skills_by_category.is_empty());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let s = scanner();
        let text = "Experience: Python | Django | AWS. jane@doe.dev";
        let a = serde_json::to_value(s.baseline_score(text)).unwrap();
        let b = serde_json::to_value(s.baseline_score(text)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_coverage() {
        let result = small_scanner().baseline_score("python docker git");
        let tools = &result.skills_by_category[1];
        assert_eq!(tools.category, "tools");
        assert_eq!(tools.detected, vec!["docker", "git"]);
        assert_eq!(tools.detected_count, 2);
        assert_eq!(tools.total, 4);
    }

    #[test]
    fn test_category_coverage_groups_detected_skills_sorted() {
        let result = small_scanner().baseline_score("Git, Terraform, Docker and Rust");
        let languages = &result.skills_by_category[0];
        let tools = &result.skills_by_category[1];

        assert_eq!(languages.detected, vec!["rust"]);
        assert_eq!(tools.detected, vec!["docker", "git", "terraform"]);
        assert_eq!(tools.detected_count, 3);

        let regrouped: usize = result.skills_by_category.iter().map(|c| c.detected_count).sum();
        assert_eq!(regrouped, result.detected_skills.len());
    }

    #[test]
    fn test_substring_policy_scores_loose_matches() {
        let taxonomy = SkillTaxonomy::new(vec![
            ("languages", vec!["c", "r", "go", "python"]),
            ("tools", vec!["docker"]),
        ])
        .unwrap();
        let taxonomy = Arc::new(taxonomy);
        let loose = AtsScanner::new(taxonomy.clone(), MatchPolicy::Substring).unwrap();
        let strict = AtsScanner::new(taxonomy, MatchPolicy::WholeWord).unwrap();

        let result = loose.baseline_score("A picture");
        assert_eq!(result.match_policy, MatchPolicy::Substring);
        assert_eq!(result.detected_skills, SkillSet::from(["c", "r"].map(String::from)));
        // skills 45 * 2 / 5 + sections 0 + length 5 + format 15
        assert_eq!(result.breakdown.skill_score, 18.0);
        assert_eq!(result.score, 38.0);
        assert!(has_warning(&result, AtsWarning::AddMoreSkills));

        assert_eq!(strict.baseline_score("A picture").score, 20.0);

        let matched = loose.job_match_score("A picture", "C and Go");
        assert_eq!(matched.match_percentage, Some(50.0));
        assert_eq!(
            matched.warnings.last().unwrap(),
            &AtsWarning::PartialJobMatch(50.0).to_string()
        );
        let gap = matched.job_match.unwrap();
        assert!(gap.missing_skills.contains("go"));
    }

    #[test]
    fn test_custom_rubric_total_floors_at_zero() {
        let rubric = Rubric {
            format_weight: 5.0,
            table_penalty: 20.0,
            length: LengthBands {
                minimal: -30.0,
                ..LengthBands::default()
            },
            ..Rubric::default()
        };
        let taxonomy = Arc::new(software_taxonomy().unwrap());
        let s = AtsScanner::with_rubric(taxonomy, MatchPolicy::WholeWord, rubric).unwrap();

        let result = s.baseline_score("|");
        assert_eq!(result.breakdown.format_score, 0.0);
        assert_eq!(result.breakdown.length_score, -30.0);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.warnings[0], AtsWarning::AvoidTables.to_string());
    }

    #[test]
    fn test_job_match_half_coverage() {
        let result = scanner().job_match_score("kubernetes", "We need kubernetes and terraform");

        assert_eq!(result.match_percentage, Some(50.0));
        assert_eq!(result.mode, AnalysisMode::JobMatch);
        let last = result.warnings.last().unwrap();
        assert!(last.contains("50.00"), "{last}");
        assert_eq!(last, &AtsWarning::PartialJobMatch(50.0).to_string());

        let gap = result.job_match.unwrap();
        assert_eq!(gap.matched_skills.len(), 1);
        assert!(gap.missing_skills.contains("terraform"));
    }

    #[test]
    fn test_job_match_without_recognized_skills() {
        for resume in ["", "python docker kubernetes"] {
            let result = scanner().job_match_score(resume, "Friendly team player wanted");
            assert_eq!(result.match_percentage, Some(0.0));
            assert_eq!(
                result.warnings.last().unwrap(),
                &AtsWarning::NoJobSkills.to_string()
            );
        }
    }

    #[test]
    fn test_job_match_warnings_append_after_baseline() {
        let s = scanner();
        let baseline = s.baseline_score("python");
        let matched = s.job_match_score("python", "python java rust");

        assert_eq!(&matched.warnings[..baseline.warnings.len()], &baseline.warnings[..]);
        assert_eq!(matched.warnings.len(), baseline.warnings.len() + 1);
        assert_eq!(matched.match_percentage, Some(33.33));
        assert!(matched.warnings.last().unwrap().contains("33.33%"));
        assert_eq!(matched.score, baseline.score);
    }

    #[test]
    fn test_full_job_match_adds_no_warning() {
        let s = scanner();
        let baseline = s.baseline_score("python java");
        let matched = s.job_match_score("python java", "Python and Java");
        assert_eq!(matched.match_percentage, Some(100.0));
        assert_eq!(matched.warnings, baseline.warnings);
    }

    #[test]
    fn test_analyze_dispatches_on_mode() {
        let s = scanner();
        let baseline = s.analyze("python", Some("java"), AnalysisMode::Baseline);
        assert!(baseline.match_percentage.is_none());
        assert!(baseline.job_match.is_none());

        let matched = s.analyze("python", None, AnalysisMode::JobMatch);
        assert_eq!(matched.match_percentage, Some(0.0));
    }
}
