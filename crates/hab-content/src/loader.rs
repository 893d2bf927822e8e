//! Content file loading and normalization.
//!
//! Files are read on a bounded worker pool (`futures::stream::buffered`,
//! which yields results in input order, so downstream merging stays
//! deterministic regardless of I/O completion order). Parse failures and
//! dropped items become warnings; they never abort the run.

use futures::StreamExt;
use serde_json::{Value, json};

use hab_core::enums::{FileKind, ItemKind};
use hab_core::item::extract_id;
use hab_core::{ContentFileDescriptor, ContentWarning, IssueSet};

use crate::envelope::{HABIT_KEYS, RESEARCH_KEYS, Shape, sniff};

/// One file's normalized contribution, in discovery order.
#[derive(Debug)]
pub struct LoadedFile {
    pub descriptor: ContentFileDescriptor,
    pub habits: Vec<Value>,
    pub research: Vec<Value>,
}

impl LoadedFile {
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.habits.len() + self.research.len()
    }
}

/// Everything the loader produces for one run.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub files: Vec<LoadedFile>,
    pub issues: IssueSet,
}

/// Read and normalize every discovered file, at most `concurrency` files in
/// flight at once.
pub async fn load_all(descriptors: Vec<ContentFileDescriptor>, concurrency: usize) -> LoadOutcome {
    let results: Vec<(LoadedFile, IssueSet)> = futures::stream::iter(descriptors.into_iter().map(load_file))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut outcome = LoadOutcome::default();
    for (file, issues) in results {
        outcome.issues.extend(issues);
        outcome.files.push(file);
    }
    tracing::debug!(
        files = outcome.files.len(),
        items = outcome.files.iter().map(LoadedFile::item_count).sum::<usize>(),
        "loading finished"
    );
    outcome
}

async fn load_file(descriptor: ContentFileDescriptor) -> (LoadedFile, IssueSet) {
    let mut issues = IssueSet::new();
    let mut habits = Vec::new();
    let mut research = Vec::new();

    match tokio::fs::read_to_string(&descriptor.path).await {
        Ok(text) => match serde_json::from_str::<Value>(&text) {
            Ok(document) => {
                (habits, research) = normalize(&descriptor, &document, &mut issues);
            }
            Err(error) => issues.warnings.push(ContentWarning::new(
                "parse",
                format!("failed to parse '{}': {error}", descriptor.filename),
                Some(json!({"file": descriptor.filename})),
            )),
        },
        Err(error) => issues.warnings.push(ContentWarning::new(
            "parse",
            format!("failed to read '{}': {error}", descriptor.filename),
            Some(json!({"file": descriptor.filename})),
        )),
    }

    let habits = keep_identified(habits, &descriptor, &mut issues);
    let research = keep_identified(research, &descriptor, &mut issues);

    (
        LoadedFile {
            descriptor,
            habits,
            research,
        },
        issues,
    )
}

/// Route a parsed document into habit and research item lists.
fn normalize(
    descriptor: &ContentFileDescriptor,
    document: &Value,
    issues: &mut IssueSet,
) -> (Vec<Value>, Vec<Value>) {
    match descriptor.kind {
        FileKind::Habit => (sniff_or_warn(descriptor, document, HABIT_KEYS, issues), Vec::new()),
        FileKind::Research => (Vec::new(), sniff_or_warn(descriptor, document, RESEARCH_KEYS, issues)),
        FileKind::Custom => normalize_custom(descriptor, document, issues),
    }
}

fn sniff_or_warn(
    descriptor: &ContentFileDescriptor,
    document: &Value,
    keys: &[&'static str],
    issues: &mut IssueSet,
) -> Vec<Value> {
    match sniff(document, keys) {
        Shape::Unrecognized => {
            issues.warnings.push(format_warning(descriptor));
            Vec::new()
        }
        shape => shape.into_items(),
    }
}

/// Custom files may mix kinds: `habits` and `research` keys are inspected
/// independently; bare arrays and single objects fall back to filename
/// inference, defaulting to habits when ambiguous.
fn normalize_custom(
    descriptor: &ContentFileDescriptor,
    document: &Value,
    issues: &mut IssueSet,
) -> (Vec<Value>, Vec<Value>) {
    if let Some(object) = document.as_object() {
        let habits = object.get("habits").and_then(Value::as_array).cloned();
        let research = object.get("research").and_then(Value::as_array).cloned();
        if habits.is_some() || research.is_some() {
            return (habits.unwrap_or_default(), research.unwrap_or_default());
        }
        if !object.contains_key("id") {
            issues.warnings.push(format_warning(descriptor));
            return (Vec::new(), Vec::new());
        }
    } else if document.as_array().is_none() {
        issues.warnings.push(format_warning(descriptor));
        return (Vec::new(), Vec::new());
    }

    // Bare array or single object: no distinguishing key, infer from the
    // filename.
    let items = match sniff(document, &[]) {
        Shape::Unrecognized => {
            issues.warnings.push(format_warning(descriptor));
            return (Vec::new(), Vec::new());
        }
        shape => shape.into_items(),
    };

    match infer_kind(&descriptor.filename) {
        Some(ItemKind::Research) => (Vec::new(), items),
        Some(ItemKind::Habit) => (items, Vec::new()),
        None => {
            issues.warnings.push(ContentWarning::new(
                "classification",
                format!(
                    "could not infer content kind for '{}'; defaulting to habits. Disambiguate with a 'habits' or 'research' key",
                    descriptor.filename
                ),
                Some(json!({"file": descriptor.filename})),
            ));
            (items, Vec::new())
        }
    }
}

/// Kind inference from filename substrings. Returns `None` when the name
/// mentions both kinds or neither.
fn infer_kind(filename: &str) -> Option<ItemKind> {
    let lower = filename.to_lowercase();
    match (lower.contains("habit"), lower.contains("research")) {
        (true, false) => Some(ItemKind::Habit),
        (false, true) => Some(ItemKind::Research),
        _ => None,
    }
}

/// Drop items that are not objects or carry no usable `id`. Dropped items are
/// warned about and never counted toward totals.
fn keep_identified(
    items: Vec<Value>,
    descriptor: &ContentFileDescriptor,
    issues: &mut IssueSet,
) -> Vec<Value> {
    let mut kept = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let identified = item
            .as_object()
            .is_some_and(|object| extract_id(object.get("id")).is_some());
        if identified {
            kept.push(item);
        } else {
            issues.warnings.push(ContentWarning::new(
                "format",
                format!("item {index} in '{}' has no usable id and was dropped", descriptor.filename),
                Some(json!({"file": descriptor.filename, "index": index})),
            ));
        }
    }
    kept
}

fn format_warning(descriptor: &ContentFileDescriptor) -> ContentWarning {
    ContentWarning::new(
        "format",
        format!("unrecognized content shape in '{}'", descriptor.filename),
        Some(json!({"file": descriptor.filename})),
    )
}
