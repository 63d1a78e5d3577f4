//! Document-editing core for the resume workflow.
//!
//! Three pieces carry the real invariants: `history` (undo/redo over
//! complete document snapshots), `diff` (token-level change visualization),
//! and `privacy` (reversible identity stripping around the external
//! generation service). `session` owns them and applies the caller-side
//! policies — the trailing-edge save debounce and the
//! anonymize → generate → restore flow — against the collaborator traits
//! in `store` and `generate`.

pub mod config;
pub mod diff;
pub mod errors;
pub mod generate;
pub mod history;
pub mod models;
pub mod privacy;
pub mod session;
pub mod store;

pub use config::EditorConfig;
pub use diff::{compute_diff, diff_resumes, DiffKind, DiffPart, FieldDiff};
pub use errors::EditorError;
pub use generate::{GenerateError, GenerationService};
pub use history::HistoryStore;
pub use models::{Bullet, EducationEntry, ExperienceEntry, Resume};
pub use privacy::{anonymize, restore};
pub use session::EditorSession;
pub use store::{DocumentStore, InMemoryStore, StoreError, StoredVersion};
