//! Skill taxonomy: the static catalog of recognized skill keywords, grouped by category.
//!
//! Built once at startup and shared read-only (`Arc<SkillTaxonomy>`) by every scoring call.
//! Tests construct smaller taxonomies through `SkillTaxonomy::new`.

mod software;

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use software::software_taxonomy;

#[derive(Debug, Error, PartialEq)]
pub enum TaxonomyError {
    #[error("Skill '{skill}' appears in both '{first}' and '{second}'")]
    DuplicateSkill {
        skill: String,
        first: String,
        second: String,
    },

    #[error("Category '{0}' is declared more than once")]
    DuplicateCategory(String),

    #[error("Category '{0}' contains an empty skill keyword")]
    EmptySkill(String),
}

/// One named group of canonical skill keywords, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl SkillTaxonomy {
    /// Builds a taxonomy from `(category, skills)` pairs.
    ///
    /// Skills are lowercased. A skill may belong to exactly one category; a repeat
    /// inside the same category is collapsed, a repeat across categories is rejected.
    pub fn new<C, S>(categories: C) -> Result<Self, TaxonomyError>
    where
        C: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let mut built: Vec<SkillCategory> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut seen_categories: HashSet<String> = HashSet::new();

        for (name, skills) in categories {
            let name: String = name.into();
            if !seen_categories.insert(name.clone()) {
                return Err(TaxonomyError::DuplicateCategory(name));
            }

            let position = built.len();
            let mut kept = Vec::with_capacity(skills.len());

            for skill in skills {
                let skill: String = skill.into();
                let skill = skill.trim().to_lowercase();
                if skill.is_empty() {
                    return Err(TaxonomyError::EmptySkill(name));
                }
                match index.get(&skill).copied() {
                    Some(owner) if owner == position => continue,
                    Some(owner) => {
                        return Err(TaxonomyError::DuplicateSkill {
                            skill,
                            first: built[owner].name.clone(),
                            second: name,
                        })
                    }
                    None => {
                        index.insert(skill.clone(), position);
                        kept.push(skill);
                    }
                }
            }

            built.push(SkillCategory { name, skills: kept });
        }

        Ok(Self {
            categories: built,
            index,
        })
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Every skill across every category, in declaration order.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
    }

    pub fn all_skills(&self) -> BTreeSet<String> {
        self.skills().map(str::to_string).collect()
    }

    pub fn skill_count(&self) -> usize {
        self.index.len()
    }

    /// The category a canonical (lowercased) skill belongs to.
    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.index
            .get(skill)
            .map(|&i| self.categories[i].name.as_str())
    }
}
