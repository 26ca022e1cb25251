use crate::config::{AssistantConfig, ConfigError};
use crate::directory::DirectoryIndex;
use crate::intent::{first_matching_rule, normalize_text, tokenize};
use crate::models::{IntentRule, MatchOutcome};

/// Maps an utterance to exactly one canned response. Tiers are tried in
/// order (keyword rules, directory, greeting, fallback) and the first hit
/// wins. Tables are read-only after construction, so one resolver can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct IntentResolver {
    rules: Vec<IntentRule>,
    directory: DirectoryIndex,
    greetings: Vec<String>,
    greeting_response: String,
    fallback_response: String,
}

impl IntentResolver {
    pub fn new(config: AssistantConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let directory = DirectoryIndex::from_config(&config.directory);
        let greetings = config
            .greetings
            .iter()
            .map(|greeting| normalize_text(greeting))
            .collect();

        Ok(Self {
            rules: config.rules,
            directory,
            greetings,
            greeting_response: config.greeting_response,
            fallback_response: config.fallback_response,
        })
    }

    pub fn campus_default() -> Self {
        let config = AssistantConfig::campus_default();
        Self {
            directory: DirectoryIndex::from_config(&config.directory),
            rules: config.rules,
            greetings: config.greetings,
            greeting_response: config.greeting_response,
            fallback_response: config.fallback_response,
        }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn directory(&self) -> &DirectoryIndex {
        &self.directory
    }

    pub fn classify(&self, utterance: &str) -> MatchOutcome<'_> {
        let tokens = tokenize(utterance);

        if let Some((rule, token)) = first_matching_rule(&self.rules, &tokens) {
            return MatchOutcome::KeywordMatch { rule, token };
        }

        if let Some((record, token)) = self.directory.first_match(&tokens) {
            return MatchOutcome::DirectoryMatch { record, token };
        }

        // Whole-utterance equality, unlike the token matching above.
        let normalized = normalize_text(utterance);
        if self.greetings.iter().any(|greeting| *greeting == normalized) {
            return MatchOutcome::Greeting;
        }

        MatchOutcome::Fallback
    }

    pub fn render(&self, outcome: &MatchOutcome<'_>) -> String {
        match outcome {
            MatchOutcome::KeywordMatch { rule, .. } => rule.response.clone(),
            MatchOutcome::DirectoryMatch { record, .. } => format!(
                "I think you're asking about **{}** ({}). Contact: **{}**",
                record.name, record.role, record.contact
            ),
            MatchOutcome::Greeting => self.greeting_response.clone(),
            MatchOutcome::Fallback => self.fallback_response.clone(),
        }
    }

    pub fn resolve(&self, utterance: &str) -> String {
        self.render(&self.classify(utterance))
    }
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::campus_default()
    }
}
