pub mod draft;
pub mod prioritizer;
pub mod types;

pub use draft::{CommitDraft, Field, FieldSet, SIGN_OFF};
pub use prioritizer::prioritize;
pub use types::CommitType;
