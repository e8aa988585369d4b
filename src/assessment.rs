//! Per-request assessment orchestration.
//!
//! Resolves the customer profile, renders the summary and the prompt,
//! consults the reply cache, and calls the external model on a miss. The
//! record sets and policy documents are read-only for the life of the
//! process, and the prompt is byte-stable for identical inputs, so cached
//! replies stay valid until they expire.

use crate::errors::{AppError, ResultExt};
use crate::models::{AssessRequest, AssessmentMetadata, AssessmentResponse};
use crate::openai::ChatClient;
use crate::policy::PolicyDocuments;
use crate::prompt;
use crate::records::CustomerDirectory;
use chrono::{DateTime, Utc};
use moka::future::Cache;

/// A model reply held in the cache, together with the time the model
/// produced it. The timestamp travels with the reply so cache hits report
/// when the assessment was actually made, not when it was served.
#[derive(Debug, Clone)]
pub struct CachedReply {
    pub reply: String,
    pub assessed_at: DateTime<Utc>,
}

/// Orchestrates one loan-risk assessment.
pub struct AssessmentService<'a> {
    directory: &'a CustomerDirectory,
    policies: &'a PolicyDocuments,
    chat_client: &'a ChatClient,
    reply_cache: &'a Cache<String, CachedReply>,
}

impl<'a> AssessmentService<'a> {
    pub fn new(
        directory: &'a CustomerDirectory,
        policies: &'a PolicyDocuments,
        chat_client: &'a ChatClient,
        reply_cache: &'a Cache<String, CachedReply>,
    ) -> Self {
        Self {
            directory,
            policies,
            chat_client,
            reply_cache,
        }
    }

    /// Runs the lookup-and-assess flow for one request.
    ///
    /// # Arguments
    ///
    /// * `request` - The customer identifier and report format.
    ///
    /// # Returns
    ///
    /// * `Result<AssessmentResponse, AppError>` - Summary, model reply, and
    ///   metadata; `NotFound` for an unknown identifier, `ExternalApiError`
    ///   when the model call fails.
    pub async fn assess(&self, request: &AssessRequest) -> Result<AssessmentResponse, AppError> {
        let profile = self.directory.profile(request.customer_id)?;
        tracing::info!(
            "Assessing customer {} ({}, {}, format: {})",
            profile.id,
            profile.nationality,
            profile.account_status,
            request.format
        );

        let customer_summary = prompt::customer_summary(&profile, request.format);
        let assessment_prompt = prompt::assessment_prompt(&profile, self.policies, request.format);

        let cache_key = format!("{}:{}", profile.id, request.format);
        if let Some(cached) = self.reply_cache.get(&cache_key).await {
            tracing::info!("Serving cached reply for customer {}", profile.id);
            return Ok(self.build_response(
                customer_summary,
                cached.reply,
                request,
                true,
                cached.assessed_at,
            ));
        }

        let reply = self
            .chat_client
            .complete(&assessment_prompt)
            .await
            .context(format!("Assessment failed for customer {}", profile.id))?;
        let assessed_at = Utc::now();
        self.reply_cache
            .insert(
                cache_key,
                CachedReply {
                    reply: reply.clone(),
                    assessed_at,
                },
            )
            .await;

        Ok(self.build_response(customer_summary, reply, request, false, assessed_at))
    }

    fn build_response(
        &self,
        customer_summary: String,
        model_reply: String,
        request: &AssessRequest,
        cached: bool,
        assessed_at: DateTime<Utc>,
    ) -> AssessmentResponse {
        AssessmentResponse {
            customer_summary,
            model_reply,
            metadata: AssessmentMetadata {
                model: self.chat_client.model().to_string(),
                format: request.format,
                cached,
                assessed_at,
            },
        }
    }
}
