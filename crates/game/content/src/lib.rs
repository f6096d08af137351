//! Data-driven battle content and loaders.
//!
//! This crate provides static content definitions and loaders for data files:
//! - Skill catalog with tagged effect variants (JSON)
//! - Battle maps, terrain only (RON)
//! - Party and enemy starting placements (RON)
//! - Battle configuration (TOML)
//!
//! Content is consumed by the runtime and never appears in turn state.

pub mod skills;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use skills::{
    DamageEffect, HealEffect, SkillData, SkillEffect, SkillError, SkillRegistry, SkillTargeting,
    StatModifierEffect, StatusApplyEffect, TargetingKind,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MapLoader, MapTiles, PlacementLoader, Placements,
    SkillLoader,
};
