use std::fmt;

/// A single piece of feedback shown next to the score. Rendered to text in the report.
#[derive(Debug, Clone, PartialEq)]
pub enum AtsWarning {
    AvoidTables,
    TooShort { ideal_min: usize, ideal_max: usize },
    TooLong { ideal_min: usize, ideal_max: usize },
    AddMoreSkills,
    MissingExperience,
    MissingEducation,
    MissingEmail,
    NoJobSkills,
    WeakJobMatch(f64),
    PartialJobMatch(f64),
}

impl fmt::Display for AtsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtsWarning::AvoidTables => {
                f.write_str("Avoid tables - ATS systems may fail to parse them.")
            }
            AtsWarning::TooShort {
                ideal_min,
                ideal_max,
            } => write!(
                f,
                "Resume is too short for most ATS systems (aim for {ideal_min}-{ideal_max} words)."
            ),
            AtsWarning::TooLong {
                ideal_min,
                ideal_max,
            } => write!(
                f,
                "Resume is too long; keep it concise (aim for {ideal_min}-{ideal_max} words)."
            ),
            AtsWarning::AddMoreSkills => {
                f.write_str("Add more relevant technical skills to improve your ATS score.")
            }
            AtsWarning::MissingExperience => {
                f.write_str("Include an 'Experience' or 'Work Experience' section.")
            }
            AtsWarning::MissingEducation => f.write_str("Include an 'Education' section."),
            AtsWarning::MissingEmail => {
                f.write_str("Add an email address for contact information.")
            }
            AtsWarning::NoJobSkills => f.write_str("No specific skills found in job description."),
            AtsWarning::WeakJobMatch(pct) => write!(
                f,
                "Your resume matches only {pct:.2}% of job requirements. Add more relevant skills."
            ),
            AtsWarning::PartialJobMatch(pct) => write!(
                f,
                "Good match ({pct:.2}%), but you could add more job-specific keywords."
            ),
        }
    }
}

/// Tiered feedback for a computed job-match percentage: < 50 strong, [50, 75) mild, else none.
pub fn job_match_warning(match_percentage: f64) -> Option<AtsWarning> {
    if match_percentage < 50.0 {
        Some(AtsWarning::WeakJobMatch(match_percentage))
    } else if match_percentage < 75.0 {
        Some(AtsWarning::PartialJobMatch(match_percentage))
    } else {
        None
    }
}
