//! Data models: compile-time literal content for every section.
//!
//! - project: the gallery collection and its category filter
//! - skills: category -> skill lists, glyph mapping, tools grid
//! - bio: biography / education / learning-path text

pub mod bio;
pub mod project;
pub mod skills;

pub use project::{
    filter_by_category, ids_unique, project_by_id, Project, ALL_CATEGORY, CATEGORIES, PROJECTS,
};
pub use skills::{skill_glyph, SkillCategory, Tool, MAX_DISPLAY_SKILLS, SKILL_CATEGORIES, TOOLS};
