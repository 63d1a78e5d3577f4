//! Token-level text diff used to visualize changes between two document
//! versions.
//!
//! Flow: equality short-circuit → tokenize both strings → trim the common
//! token prefix and suffix → emit up to four parts (unchanged prefix,
//! removed middle, added middle, unchanged suffix).
//!
//! This is deliberately a prefix/suffix-trim diff, not an LCS diff: it is
//! O(n) and isolates a single contiguous edited region exactly, but two
//! disjoint edits in one string are reported as one block spanning both.

use serde::{Deserialize, Serialize};

use crate::models::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Unchanged,
    Added,
    Removed,
}

/// One contiguous span of a computed diff.
///
/// Concatenating the non-`Removed` parts of a diff reproduces the new text
/// exactly; concatenating the non-`Added` parts reproduces the old text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffPart {
    pub value: String,
    pub kind: DiffKind,
}

/// A diff for one comparable document field, labeled with a stable path
/// such as `summary` or `experience[1].bullets[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: String,
    pub parts: Vec<DiffPart>,
}

/// Computes the structured diff between two strings.
pub fn compute_diff(old_text: &str, new_text: &str) -> Vec<DiffPart> {
    if old_text == new_text {
        return vec![DiffPart {
            value: old_text.to_string(),
            kind: DiffKind::Unchanged,
        }];
    }

    let old_tokens = tokenize(old_text);
    let new_tokens = tokenize(new_text);

    let mut prefix = 0;
    while prefix < old_tokens.len()
        && prefix < new_tokens.len()
        && old_tokens[prefix] == new_tokens[prefix]
    {
        prefix += 1;
    }

    // The suffix scan must stop before it would overlap the prefix scan.
    let max_suffix = old_tokens.len().min(new_tokens.len()) - prefix;
    let mut suffix = 0;
    while suffix < max_suffix
        && old_tokens[old_tokens.len() - 1 - suffix] == new_tokens[new_tokens.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let mut parts = Vec::new();
    push_joined(&mut parts, &old_tokens[..prefix], DiffKind::Unchanged);
    push_joined(
        &mut parts,
        &old_tokens[prefix..old_tokens.len() - suffix],
        DiffKind::Removed,
    );
    push_joined(
        &mut parts,
        &new_tokens[prefix..new_tokens.len() - suffix],
        DiffKind::Added,
    );
    push_joined(
        &mut parts,
        &old_tokens[old_tokens.len() - suffix..],
        DiffKind::Unchanged,
    );
    parts
}

/// Per-field diffs between two resume versions, for the fields the editor
/// renders as text: summary, experience bullet texts, and skills.
/// Unchanged fields are omitted.
pub fn diff_resumes(old: &Resume, new: &Resume) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();

    push_field_diff(&mut diffs, "summary", &old.summary, &new.summary);

    let entry_count = old.experience.len().max(new.experience.len());
    for i in 0..entry_count {
        let old_bullets = old.experience.get(i).map(|e| e.bullets.as_slice());
        let new_bullets = new.experience.get(i).map(|e| e.bullets.as_slice());
        let bullet_count = old_bullets
            .map_or(0, |b| b.len())
            .max(new_bullets.map_or(0, |b| b.len()));
        for j in 0..bullet_count {
            let old_text = old_bullets
                .and_then(|b| b.get(j))
                .map_or("", |b| b.text.as_str());
            let new_text = new_bullets
                .and_then(|b| b.get(j))
                .map_or("", |b| b.text.as_str());
            push_field_diff(
                &mut diffs,
                &format!("experience[{i}].bullets[{j}]"),
                old_text,
                new_text,
            );
        }
    }

    let skill_count = old.skills.len().max(new.skills.len());
    for i in 0..skill_count {
        let old_skill = old.skills.get(i).map_or("", String::as_str);
        let new_skill = new.skills.get(i).map_or("", String::as_str);
        push_field_diff(&mut diffs, &format!("skills[{i}]"), old_skill, new_skill);
    }

    diffs
}

// ────────────────────────────────────────────────────────────────────────────
// Tokenization
// ────────────────────────────────────────────────────────────────────────────

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | '!' | '?')
}

/// Splits `text` into tokens: a maximal run of non-delimiter characters
/// together with its trailing delimiter run, or the trailing remainder when
/// no delimiter follows. Delimiters stay inside the tokens, so concatenating
/// the tokens reconstructs `text` exactly.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_delimiter_run = false;
    for (i, c) in text.char_indices() {
        let is_delim = is_delimiter(c);
        if in_delimiter_run && !is_delim {
            tokens.push(&text[start..i]);
            start = i;
        }
        in_delimiter_run = is_delim;
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn push_joined(parts: &mut Vec<DiffPart>, tokens: &[&str], kind: DiffKind) {
    if tokens.is_empty() {
        return;
    }
    parts.push(DiffPart {
        value: tokens.concat(),
        kind,
    });
}

fn push_field_diff(diffs: &mut Vec<FieldDiff>, field: &str, old_text: &str, new_text: &str) {
    if old_text == new_text {
        return;
    }
    diffs.push(FieldDiff {
        field: field.to_string(),
        parts: compute_diff(old_text, new_text),
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
