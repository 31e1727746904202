//! Core framework: input events, the View trait, and the Service marker.

pub mod event;
pub mod service;
pub mod view;

pub use event::{InputEvent, Key};
pub use service::Service;
pub use view::{EventResult, View};
