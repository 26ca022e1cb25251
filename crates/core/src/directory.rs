use serde::{Deserialize, Serialize};

use crate::intent::is_similar;
use crate::models::{Category, ContactEntry, DirectoryRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub office: Vec<ContactEntry>,
    #[serde(default)]
    pub faculty: Vec<ContactEntry>,
    #[serde(default, alias = "gymkhana")]
    pub student_body: Vec<ContactEntry>,
}

impl DirectoryConfig {
    pub fn entries(&self, category: Category) -> &[ContactEntry] {
        match category {
            Category::Office => &self.office,
            Category::Faculty => &self.faculty,
            Category::StudentBody => &self.student_body,
        }
    }
}

/// Office, faculty and student-body records flattened in that order. The
/// order is the tie-break for directory matches, so lookups are linear scans.
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    records: Vec<DirectoryRecord>,
}

impl DirectoryIndex {
    pub fn from_config(config: &DirectoryConfig) -> Self {
        let records = Category::ALL
            .iter()
            .flat_map(|category| {
                config
                    .entries(*category)
                    .iter()
                    .map(move |entry| DirectoryRecord {
                        name: entry.name.clone(),
                        role: entry.role.clone(),
                        contact: entry.contact.clone(),
                        category: *category,
                    })
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[DirectoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &DirectoryRecord> {
        self.records
            .iter()
            .filter(move |record| record.category == category)
    }

    /// Contacts-screen filter: plain case-folded substring on name or role,
    /// no minimum length. An empty query keeps the whole category.
    pub fn filter(&self, category: Category, query: &str) -> Vec<&DirectoryRecord> {
        let query = query.trim().to_lowercase();

        self.by_category(category)
            .filter(|record| {
                query.is_empty()
                    || record.name.to_lowercase().contains(&query)
                    || record.role.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// First record, in scan order, whose name or role contains any token.
    pub fn first_match(&self, tokens: &[String]) -> Option<(&DirectoryRecord, String)> {
        self.records.iter().find_map(|record| {
            tokens
                .iter()
                .find(|token| is_similar(token, &record.name) || is_similar(token, &record.role))
                .map(|token| (record, token.clone()))
        })
    }
}
