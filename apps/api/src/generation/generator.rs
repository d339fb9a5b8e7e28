//! Reply generation — orchestrates the AI path and the template fallback.
//!
//! Flow: build_prompt → GenerationClient::complete → (on any error) render_fallback.
//!
//! Upstream failures never reach the caller. The only error this module returns
//! is an internal fault in the fallback itself.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};

use crate::config::Config;
use crate::generation::prompts::{build_prompt, ReviewSanitizer};
use crate::generation::templates::{render_fallback, RandomSource};
use crate::llm_client::{GenerationClient, OpenAiClient, MODEL};
use crate::models::review::{GeneratedReply, ReplySource, ReviewRequest};

/// Builds the upstream client, or `None` when the credential is absent or a placeholder.
pub fn client_from_config(config: &Config) -> Result<Option<Arc<dyn GenerationClient>>> {
    let Some(api_key) = config.usable_api_key() else {
        info!("No usable OPENAI_API_KEY, replies will use templates only");
        return Ok(None);
    };

    let client = OpenAiClient::new(
        api_key.to_string(),
        config.openai_base_url.clone(),
        Duration::from_secs(config.generation_timeout_secs),
    )
    .context("Failed to build HTTP client for text generation")?;

    info!("LLM client initialized (model: {MODEL})");
    let client: Arc<dyn GenerationClient> = Arc::new(client);
    Ok(Some(client))
}

/// Produces replies for validated requests. Cheap to clone; shared by all handlers.
#[derive(Clone)]
pub struct ReplyGenerator {
    client: Option<Arc<dyn GenerationClient>>,
    random: Arc<dyn RandomSource>,
    sanitizer: Arc<dyn ReviewSanitizer>,
}

impl ReplyGenerator {
    pub fn new(
        client: Option<Arc<dyn GenerationClient>>,
        random: Arc<dyn RandomSource>,
        sanitizer: Arc<dyn ReviewSanitizer>,
    ) -> Self {
        Self {
            client,
            random,
            sanitizer,
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub async fn generate(&self, request: &ReviewRequest) -> Result<GeneratedReply> {
        if let Some(text) = self.try_ai(request).await {
            return Ok(reply(text, ReplySource::Ai));
        }

        let text = render_fallback(
            &request.business_name,
            &request.review_text,
            request.rating,
            self.random.as_ref(),
        )
        .context("Template fallback failed")?;

        Ok(reply(text, ReplySource::Template))
    }

    /// Returns the AI reply, or `None` if the path is disabled or the call failed.
    async fn try_ai(&self, request: &ReviewRequest) -> Option<String> {
        let client = self.client.as_ref()?;
        let prompt = build_prompt(request, self.sanitizer.as_ref());

        match client.complete(&prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                error!("OpenAI API error, falling back to templates: {e}");
                None
            }
        }
    }
}

fn reply(text: String, source: ReplySource) -> GeneratedReply {
    GeneratedReply {
        text,
        source,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::config::PLACEHOLDER_API_KEY;
    use crate::generation::prompts::Verbatim;
    use crate::generation::templates::{candidates, SeededRandom, ThreadRandom, FOOD_COMPLIMENT};
    use crate::llm_client::LlmError;

    /// Fake upstream that records calls and returns a fixed outcome.
    pub(crate) struct FakeClient {
        pub calls: AtomicUsize,
        pub last_prompt: std::sync::Mutex<Option<String>>,
        pub reply: Option<String>,
    }

    impl FakeClient {
        pub(crate) fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(None),
                reply: Some(text.to_string()),
            })
        }

        pub(crate) fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(None),
                reply: None,
            })
        }
    }

    #[async_trait]
    impl GenerationClient for FakeClient {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply.clone().ok_or(LlmError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        }
    }

    fn make_generator(client: Option<Arc<dyn GenerationClient>>) -> ReplyGenerator {
        ReplyGenerator::new(client, Arc::new(ThreadRandom), Arc::new(Verbatim))
    }

    fn joes() -> ReviewRequest {
        ReviewRequest {
            business_name: "Joe's Restaurant".to_string(),
            business_type: "restaurant".to_string(),
            review_text: "Great food!".to_string(),
            rating: 5,
        }
    }

    #[tokio::test]
    async fn test_ai_reply_used_when_client_succeeds() {
        let fake = FakeClient::answering("Thanks from Joe's!");
        let client: Arc<dyn GenerationClient> = fake.clone();
        let generator = make_generator(Some(client));

        let reply = generator.generate(&joes()).await.unwrap();

        assert_eq!(reply.text, "Thanks from Joe's!");
        assert_eq!(reply.source, ReplySource::Ai);
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
        let prompt = fake.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Review: \"Great food!\""));
    }

    #[tokio::test]
    async fn test_client_failure_falls_back_to_templates() {
        let fake = FakeClient::failing();
        let client: Arc<dyn GenerationClient> = fake.clone();
        let generator = make_generator(Some(client));

        let reply = generator.generate(&joes()).await.unwrap();

        assert_eq!(reply.source, ReplySource::Template);
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
        let expected: Vec<String> = candidates("Joe's Restaurant", 5)
            .into_iter()
            .map(|c| format!("{c}{FOOD_COMPLIMENT}"))
            .collect();
        assert!(expected.contains(&reply.text));
    }

    #[tokio::test]
    async fn test_disabled_client_uses_templates() {
        let generator = make_generator(None);
        assert!(!generator.ai_enabled());

        let reply = generator.generate(&joes()).await.unwrap();
        assert_eq!(reply.source, ReplySource::Template);
        assert!(reply.text.contains("Joe's Restaurant"));
    }

    #[tokio::test]
    async fn test_seeded_generators_agree() {
        let a = ReplyGenerator::new(None, Arc::new(SeededRandom::new(7)), Arc::new(Verbatim));
        let b = ReplyGenerator::new(None, Arc::new(SeededRandom::new(7)), Arc::new(Verbatim));
        for _ in 0..5 {
            assert_eq!(
                a.generate(&joes()).await.unwrap().text,
                b.generate(&joes()).await.unwrap().text
            );
        }
    }

    #[test]
    fn test_placeholder_credential_builds_no_client() {
        let config = Config {
            openai_api_key: Some(PLACEHOLDER_API_KEY.to_string()),
            ..Config::default()
        };
        assert!(client_from_config(&config).unwrap().is_none());
        assert!(client_from_config(&Config::default()).unwrap().is_none());
    }

    #[test]
    fn test_real_credential_builds_client() {
        let config = Config {
            openai_api_key: Some("sk-live".to_string()),
            ..Config::default()
        };
        assert!(client_from_config(&config).unwrap().is_some());
    }
}
