use std::sync::Arc;
use std::time::Instant;

use campus_core::{Category, DirectoryRecord, IntentResolver, MatchOutcome, Tier};
use campus_observability::AppMetrics;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

pub const WELCOME_MESSAGE: &str =
    "Hi! I am your Campus Assistant. Ask me about mess, faculty, or clubs!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub reply_text: String,
    pub tier: Tier,
    pub outcome_kind: String,
    pub rule_id: Option<String>,
    pub matched_token: Option<String>,
    pub record: Option<DirectoryRecord>,
}

/// Host-facing wrapper around a shared resolver. Holds no per-conversation
/// state; every call is answered independently.
#[derive(Clone)]
pub struct CampusAssistant {
    resolver: Arc<IntentResolver>,
    metrics: Arc<AppMetrics>,
}

impl CampusAssistant {
    pub fn new(resolver: Arc<IntentResolver>, metrics: Arc<AppMetrics>) -> Self {
        Self { resolver, metrics }
    }

    pub fn resolver(&self) -> &IntentResolver {
        &self.resolver
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.metrics
    }

    pub fn welcome_message(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    #[instrument(skip(self, input), fields(chars = input.text.chars().count()))]
    pub fn reply(&self, input: ChatInput) -> AssistantReply {
        let started = Instant::now();
        self.metrics.inc_request();

        let outcome = self.resolver.classify(&input.text);
        let reply_text = self.resolver.render(&outcome);
        let tier = outcome.tier();

        let (rule_id, record) = match &outcome {
            MatchOutcome::KeywordMatch { rule, .. } => (Some(rule.id.clone()), None),
            MatchOutcome::DirectoryMatch { record, .. } => (None, Some((*record).clone())),
            MatchOutcome::Greeting | MatchOutcome::Fallback => (None, None),
        };

        self.metrics.record_tier(tier);
        self.metrics.observe_latency(started.elapsed());
        info!(
            tier = tier.number(),
            outcome = outcome.kind(),
            rule = rule_id.as_deref().unwrap_or("-"),
            "utterance resolved"
        );

        AssistantReply {
            reply_text,
            tier,
            outcome_kind: outcome.kind().to_string(),
            rule_id,
            matched_token: outcome.matched_token().map(ToString::to_string),
            record,
        }
    }

    pub fn contacts(&self, category: Category, query: &str) -> Vec<DirectoryRecord> {
        self.resolver
            .directory()
            .filter(category, query)
            .into_iter()
            .cloned()
            .collect()
    }
}
