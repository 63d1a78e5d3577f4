// Document model shared by every module in the editing core.
// The resume is always handled as a complete snapshot — never as a delta.

pub mod resume;

pub use resume::{Bullet, EducationEntry, ExperienceEntry, Resume};
