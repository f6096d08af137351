use serde::{Deserialize, Serialize};

/// One payload applied by a skill, decoded from the `"Type"` discriminator.
///
/// ```
/// use battle_content::SkillEffect;
///
/// let effect: SkillEffect = serde_json::from_str(
///     r#"{ "Type": "Heal", "BaseAmount": 12, "ScalingStat": "Wisdom", "ScalingFactor": 0.5 }"#,
/// ).unwrap();
/// assert_eq!(effect.kind(), "Heal");
/// assert_eq!(effect.application_chance(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum SkillEffect {
    Damage(DamageEffect),
    Heal(HealEffect),
    StatModifier(StatModifierEffect),
    StatusApply(StatusApplyEffect),
}

impl SkillEffect {
    pub fn kind(&self) -> &'static str {
        match self {
            SkillEffect::Damage(_) => "Damage",
            SkillEffect::Heal(_) => "Heal",
            SkillEffect::StatModifier(_) => "StatModifier",
            SkillEffect::StatusApply(_) => "StatusApply",
        }
    }

    /// Probability in `0.0..=1.0` that this effect lands.
    pub fn application_chance(&self) -> f32 {
        match self {
            SkillEffect::Damage(effect) => effect.application_chance,
            SkillEffect::Heal(effect) => effect.application_chance,
            SkillEffect::StatModifier(effect) => effect.application_chance,
            SkillEffect::StatusApply(effect) => effect.application_chance,
        }
    }

    /// Effects that last beyond the turn they are applied in.
    pub fn duration_turns(&self) -> Option<u32> {
        match self {
            SkillEffect::StatModifier(effect) => Some(effect.duration_turns),
            SkillEffect::StatusApply(effect) => Some(effect.duration_turns),
            SkillEffect::Damage(_) | SkillEffect::Heal(_) => None,
        }
    }
}

fn certain() -> f32 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DamageEffect {
    /// Damage family such as `"Physical"` or `"Fire"`.
    pub damage_type: String,
    pub base_amount: i32,
    pub scaling_stat: String,
    pub scaling_factor: f32,
    #[serde(default)]
    pub can_crit: bool,
    #[serde(default)]
    pub bonus_crit_chance: f32,
    #[serde(default = "certain")]
    pub application_chance: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealEffect {
    pub base_amount: i32,
    pub scaling_stat: String,
    pub scaling_factor: f32,
    #[serde(default = "certain")]
    pub application_chance: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatModifierEffect {
    pub target_stat: String,
    pub amount: i32,
    /// When set, `amount` is a percentage of the base stat.
    #[serde(default)]
    pub is_percentage: bool,
    pub duration_turns: u32,
    #[serde(default = "certain")]
    pub application_chance: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusApplyEffect {
    pub status_effect_type: String,
    pub duration_turns: u32,
    #[serde(default = "certain")]
    pub application_chance: f32,
}
