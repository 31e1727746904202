//! Minimal service abstraction: long-lived helpers owned by the workbench.

pub trait Service {
    fn name(&self) -> &'static str;
}
