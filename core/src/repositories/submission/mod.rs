pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use r#trait::SubmissionRepository;
pub use memory::InMemorySubmissionRepository;

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
