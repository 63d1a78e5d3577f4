use serde::{Deserialize, Serialize};

/// A complete snapshot of the editable resume at one point in time.
///
/// The flat identity/contact fields at the top are the ones subject to the
/// privacy transform; everything below them is content the generation
/// service needs verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub full_name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub contact_line: String,
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

/// One experience entry with its ordered bullets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

/// A single bullet line under an experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub text: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
}

// Entries and bullets hidden by the user stay in the document; missing
// flags in stored JSON read back as visible.
fn default_visible() -> bool {
    true
}
