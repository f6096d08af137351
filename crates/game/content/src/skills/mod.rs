//! Skill catalog definitions.
//!
//! Skills are authored as JSON records with PascalCase keys. Each skill carries
//! one [`SkillTargeting`] block and a list of [`SkillEffect`]s whose concrete
//! kind is chosen by the `"Type"` field.
mod effect;
mod targeting;

pub use effect::{DamageEffect, HealEffect, SkillEffect, StatModifierEffect, StatusApplyEffect};
pub use targeting::{SkillTargeting, TargetingKind};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub targeting: SkillTargeting,
    #[serde(default)]
    pub effects: Vec<SkillEffect>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("skill id must not be empty (name: {name})")]
    MissingId { name: String },

    #[error("duplicate skill id '{0}'")]
    DuplicateId(String),
}

/// Explicitly constructed lookup table of skills keyed by id.
#[derive(Clone, Debug, Default)]
pub struct SkillRegistry {
    skills: BTreeMap<String, SkillData>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `skill`, rejecting blank or already-registered ids.
    pub fn insert(&mut self, skill: SkillData) -> Result<(), SkillError> {
        if skill.id.trim().is_empty() {
            return Err(SkillError::MissingId { name: skill.name });
        }
        if self.skills.contains_key(&skill.id) {
            return Err(SkillError::DuplicateId(skill.id));
        }
        self.skills.insert(skill.id.clone(), skill);
        Ok(())
    }

    pub fn from_skills(skills: impl IntoIterator<Item = SkillData>) -> Result<Self, SkillError> {
        let mut registry = Self::new();
        for skill in skills {
            registry.insert(skill)?;
        }
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&SkillData> {
        self.skills.get(id)
    }

    /// Iterates skills in id order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillData> {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
