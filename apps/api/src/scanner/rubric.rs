use crate::models::report::FormatSignals;

/// Word-count bands for the length component.
#[derive(Debug, Clone)]
pub struct LengthBands {
    pub ideal_min: usize,
    pub ideal_max: usize,
    pub acceptable_min: usize,
    pub acceptable_max: usize,
    pub full: f64,
    pub partial: f64,
    pub minimal: f64,
}

impl Default for LengthBands {
    fn default() -> Self {
        Self {
            ideal_min: 350,
            ideal_max: 900,
            acceptable_min: 250,
            acceptable_max: 1000,
            full: 15.0,
            partial: 10.0,
            minimal: 5.0,
        }
    }
}

impl LengthBands {
    /// [350, 900] → full; [250, 350) or (900, 1000] → partial; anything else → minimal.
    pub fn score(&self, words: usize) -> f64 {
        if (self.ideal_min..=self.ideal_max).contains(&words) {
            self.full
        } else if (self.acceptable_min..=self.acceptable_max).contains(&words) {
            self.partial
        } else {
            self.minimal
        }
    }
}

/// Weights, checklists and thresholds for the ATS score. Components sum to 100.
#[derive(Debug, Clone)]
pub struct Rubric {
    pub skill_weight: f64,
    pub section_weight: f64,
    pub sections: Vec<String>,
    pub length: LengthBands,
    pub format_weight: f64,
    pub table_penalty: f64,
    /// Fewer detected skills than this triggers the "add more skills" warning.
    pub min_skills: usize,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            skill_weight: 45.0,
            section_weight: 25.0,
            sections: [
                "experience",
                "education",
                "projects",
                "skills",
                "github",
                "certifications",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            length: LengthBands::default(),
            format_weight: 15.0,
            table_penalty: 5.0,
            min_skills: 5,
        }
    }
}

const TABLE_DELIMITERS: &[char] = &['|', '│'];
const BULLET_MARKERS: &[char] = &['•', '-'];
const SOCIAL_KEYWORDS: &[&str] = &["linkedin", "github"];

impl Rubric {
    /// Zero when the taxonomy is empty.
    pub fn skill_score(&self, detected: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.skill_weight * detected as f64 / total as f64
    }

    /// Checklist terms are matched as substrings of the lowercased resume.
    pub fn section_score(&self, lowered: &str) -> (f64, Vec<String>) {
        let found: Vec<String> = self
            .sections
            .iter()
            .filter(|s| lowered.contains(s.as_str()))
            .cloned()
            .collect();

        if self.sections.is_empty() {
            return (0.0, found);
        }
        let score = self.section_weight * found.len() as f64 / self.sections.len() as f64;
        (score, found)
    }

    /// Format starts at full weight and only the table penalty moves it. Bullet, email
    /// and social-link signals are reported without adding points.
    pub fn format_score(&self, original: &str, lowered: &str) -> (f64, FormatSignals) {
        let signals = FormatSignals {
            has_table_delimiters: original.contains(TABLE_DELIMITERS),
            has_bullets: original.contains(BULLET_MARKERS),
            has_email_chars: original.contains('@') && original.contains('.'),
            has_social_links: SOCIAL_KEYWORDS.iter().any(|k| lowered.contains(k)),
        };

        let mut score = self.format_weight;
        if signals.has_table_delimiters {
            score -= self.table_penalty;
        }
        (score.max(0.0), signals)
    }
}
