//! The validator check battery. Each module exposes one
//! `run(&CheckContext, &mut IssueSet)` entry, registered in order in
//! `crate::CHECKS`.

pub mod duplicate_ids;
pub mod field_values;
pub mod goal_files;
pub mod goal_tags;
pub mod quality;
pub mod references;
pub mod required_fields;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;
    use serde_json::Value;

    use hab_content::loader::LoadedFile;
    use hab_content::merge::MergedContent;
    use hab_core::enums::{FileKind, ItemKind};
    use hab_core::{ContentFileDescriptor, ContentItem};

    pub fn habit(value: Value) -> ContentItem {
        ContentItem::from_object(ItemKind::Habit, value.as_object().unwrap().clone(), "test.json")
            .expect("fixture habit must carry an id")
    }

    pub fn research(value: Value) -> ContentItem {
        ContentItem::from_object(ItemKind::Research, value.as_object().unwrap().clone(), "test.json")
            .expect("fixture research must carry an id")
    }

    pub fn context_with(habits: Vec<ContentItem>, research: Vec<ContentItem>) -> MergedContent {
        let mut merged = MergedContent::default();
        for item in habits {
            merged.habits.insert(item.id.clone(), item);
        }
        for item in research {
            merged.research.insert(item.id.clone(), item);
        }
        merged
    }

    pub fn goal_file(filename: &str, category: &str, habits: Vec<Value>) -> LoadedFile {
        LoadedFile {
            descriptor: ContentFileDescriptor {
                path: filename.into(),
                filename: filename.to_string(),
                category: category.to_string(),
                kind: FileKind::Habit,
                modified_at: Utc::now(),
                size_bytes: 0,
            },
            habits,
            research: Vec::new(),
        }
    }
}
