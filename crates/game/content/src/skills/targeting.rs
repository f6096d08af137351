use battle_core::{HexCoord, OpenField, ReachQuery, straight_projection};
use serde::{Deserialize, Serialize};

/// Shape of the area a skill can be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetingKind {
    #[serde(rename = "Self")]
    SelfOnly,
    SingleEnemy,
    SingleAlly,
    Line,
    AreaOfEffect,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillTargeting {
    #[serde(rename = "Type")]
    pub kind: TargetingKind,
    /// Maximum distance of the aimed cell, in hex steps.
    pub range: u32,
    /// Radius around the aimed cell; zero for single-cell skills.
    #[serde(default)]
    pub area_radius: u32,
    #[serde(default = "line_of_sight_default")]
    pub requires_line_of_sight: bool,
    #[serde(default)]
    pub affects_allies: bool,
    #[serde(default)]
    pub affects_enemies: bool,
}

fn line_of_sight_default() -> bool {
    true
}

impl SkillTargeting {
    /// Cells the caster standing at `origin` may aim at, ignoring occupancy.
    ///
    /// Line skills use the six straight rays; every other kind uses the
    /// open-field range ball around the caster.
    pub fn candidate_cells(&self, origin: HexCoord) -> Vec<HexCoord> {
        match self.kind {
            TargetingKind::SelfOnly => vec![origin],
            TargetingKind::Line => straight_projection(origin, self.range),
            TargetingKind::SingleEnemy | TargetingKind::SingleAlly => {
                ReachQuery::new(origin, self.range).run(&OpenField)
            }
            TargetingKind::AreaOfEffect => ReachQuery::new(origin, self.range)
                .including_start(true)
                .run(&OpenField),
        }
    }

    /// Cells affected when the skill is aimed at `center`.
    pub fn affected_cells(&self, center: HexCoord) -> Vec<HexCoord> {
        ReachQuery::new(center, self.area_radius)
            .including_start(true)
            .run(&OpenField)
    }
}
