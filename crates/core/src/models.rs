use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Office,
    Faculty,
    StudentBody,
}

impl Category {
    /// Concatenation order of the directory scan.
    pub const ALL: [Category; 3] = [Self::Office, Self::Faculty, Self::StudentBody];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "office" | "administration" | "admin" => Some(Self::Office),
            "faculty" | "teachers" => Some(Self::Faculty),
            "student_body" | "studentbody" | "student-body" | "gymkhana" => {
                Some(Self::StudentBody)
            }
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Faculty => "faculty",
            Self::StudentBody => "student_body",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Faculty => "Faculty",
            Self::StudentBody => "Gymkhana",
        }
    }
}

/// One row of a directory category table as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub name: String,
    pub role: String,
    #[serde(alias = "email")]
    pub contact: String,
}

impl ContactEntry {
    pub fn new(name: &str, role: &str, contact: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            contact: contact.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub name: String,
    pub role: String,
    pub contact: String,
    pub category: Category,
}

/// Keyword rule for the first tier. There is no per-rule tier number: every
/// rule belongs to tier 1, and the rule's position in the table alone
/// decides precedence when several rules match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub id: String,
    pub triggers: Vec<String>,
    pub response: String,
}

impl IntentRule {
    pub fn new(id: &str, triggers: &[&str], response: &str) -> Self {
        Self {
            id: id.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            response: response.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Keyword,
    Directory,
    Greeting,
    Fallback,
}

impl Tier {
    pub fn number(self) -> u8 {
        match self {
            Self::Keyword => 1,
            Self::Directory => 2,
            Self::Greeting => 3,
            Self::Fallback => 4,
        }
    }
}

/// Result of running an utterance through the tiers. Borrows the matched
/// rule or record from the resolver's tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchOutcome<'a> {
    KeywordMatch {
        rule: &'a IntentRule,
        token: String,
    },
    DirectoryMatch {
        record: &'a DirectoryRecord,
        token: String,
    },
    Greeting,
    Fallback,
}

impl MatchOutcome<'_> {
    pub fn tier(&self) -> Tier {
        match self {
            Self::KeywordMatch { .. } => Tier::Keyword,
            Self::DirectoryMatch { .. } => Tier::Directory,
            Self::Greeting => Tier::Greeting,
            Self::Fallback => Tier::Fallback,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::KeywordMatch { .. } => "keyword_match",
            Self::DirectoryMatch { .. } => "directory_match",
            Self::Greeting => "greeting",
            Self::Fallback => "fallback",
        }
    }

    /// The utterance token that triggered a tier 1 or tier 2 match.
    pub fn matched_token(&self) -> Option<&str> {
        match self {
            Self::KeywordMatch { token, .. } | Self::DirectoryMatch { token, .. } => {
                Some(token.as_str())
            }
            Self::Greeting | Self::Fallback => None,
        }
    }
}
