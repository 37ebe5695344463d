use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;

use crate::application::ports::{LlmClient, ResolutionError, TitleResolver};
use crate::domain::ResolvedTitle;
use crate::infrastructure::observability::sanitize_prompt;

static ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(title:(.+?),?\s*artist:(.+?)\)$").unwrap());

pub fn build_prompt(hint: &str) -> String {
    format!(
        "Extract the song title and artist from the following text:({}), just give the answer \
         with format like : (title:title,artist:artist), dont include many information except \
         artist and title",
        hint
    )
}

/// Reads a `(title:<t>,artist:<a>)` answer. Anything else, an empty answer
/// included, resolves to `Unknown` for both fields.
pub fn parse_title_artist(answer: &str) -> ResolvedTitle {
    match ANSWER.captures(answer.trim()) {
        Some(caps) => ResolvedTitle::new(caps[1].trim(), caps[2].trim()),
        None => ResolvedTitle::unknown(),
    }
}

/// Title resolution backed by a text-completion model.
pub struct LlmTitleResolver {
    llm_client: Arc<dyn LlmClient>,
}

impl LlmTitleResolver {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }
}

#[async_trait]
impl TitleResolver for LlmTitleResolver {
    async fn resolve(&self, hint: &str) -> Result<ResolvedTitle, ResolutionError> {
        tracing::debug!(hint = %sanitize_prompt(hint), "Resolving title");

        let answer = self.llm_client.complete(&build_prompt(hint)).await?;
        let resolved = parse_title_artist(&answer);

        if resolved == ResolvedTitle::unknown() {
            tracing::warn!(answer = %sanitize_prompt(&answer), "Unrecognised title answer");
        } else {
            tracing::debug!(title = %resolved.title, artist = %resolved.artist, "Title resolved");
        }
        Ok(resolved)
    }
}
