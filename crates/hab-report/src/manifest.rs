//! Content file manifest.

use std::collections::BTreeMap;

use hab_core::ContentFileDescriptor;
use hab_core::reports::{ContentManifest, ManifestEntry, NamingConventions};

/// Inventory the discovered files with per-category counts and the naming
/// patterns governed directories follow.
#[must_use]
pub fn build_manifest(descriptors: &[ContentFileDescriptor]) -> ContentManifest {
    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    let files: Vec<ManifestEntry> = descriptors
        .iter()
        .map(|descriptor| {
            *category_counts.entry(descriptor.category.clone()).or_default() += 1;
            ManifestEntry {
                filename: descriptor.filename.clone(),
                category: descriptor.category.clone(),
                kind: descriptor.kind,
                size_bytes: descriptor.size_bytes,
                modified_at: descriptor.modified_at,
            }
        })
        .collect();

    ContentManifest {
        total_files: files.len(),
        files,
        category_counts,
        naming_conventions: NamingConventions {
            habit_files: String::from("<category>-habits.json"),
            research_files: String::from("<category>-research.json"),
            examples: vec![
                String::from("sleep-habits.json"),
                String::from("nutrition-research.json"),
            ],
        },
    }
}
