//! View layer: one view per portfolio section.

pub mod about;
pub mod projects;
pub mod skills;

pub use about::AboutView;
pub use projects::ProjectsView;
pub use skills::SkillsView;
