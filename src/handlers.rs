use crate::assessment::{AssessmentService, CachedReply};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::*;
use crate::openai::ChatClient;
use crate::policy::PolicyDocuments;
use crate::records::CustomerDirectory;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use moka::future::Cache;
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// Everything here is created once at startup and read-only after (the reply
/// cache is the only piece with interior mutability).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Fixed customer record sets.
    pub directory: CustomerDirectory,
    /// Policy documents loaded at startup.
    pub policies: PolicyDocuments,
    /// Client for the external model API.
    pub chat_client: ChatClient,
    /// Model reply cache keyed by `{customer_id}:{format}` (1 hour TTL).
    pub reply_cache: Cache<String, CachedReply>,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "loan-risk-api",
            "version": "0.1.0"
        })),
    )
}

/// GET /api/v1/customers
///
/// Lists the full set of known customer identifiers. This is what the form
/// page calls to populate its dropdown.
///
/// # Arguments
///
/// * `state` - The application state.
///
/// # Returns
///
/// * `Json<Vec<CustomerListEntry>>` - All known customers in fixed order.
pub async fn list_customers(State(state): State<Arc<AppState>>) -> Json<Vec<CustomerListEntry>> {
    let entries = state
        .directory
        .ids()
        .into_iter()
        .filter_map(|id| {
            state.directory.credit(id).map(|record| CustomerListEntry {
                id: record.id,
                name: record.name.clone(),
            })
        })
        .collect();

    Json(entries)
}

/// GET /api/v1/customers/:id
///
/// Returns the derived attribute bundle for one customer: credit score,
/// account status, nationality, and the three-way PR status.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `id` - The customer identifier.
///
/// # Returns
///
/// * `Result<Json<CustomerProfile>, AppError>` - The joined bundle or `NotFound`.
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<CustomerProfile>, AppError> {
    tracing::info!("GET /customers/{}", id);
    let profile = state.directory.profile(id)?;
    Ok(Json(profile))
}

/// POST /api/v1/assess
///
/// Runs the full lookup-and-assess flow: join the record sets, render the
/// customer summary, assemble the prompt, submit it to the external model,
/// and return the free-text reply verbatim.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `request` - JSON body with `customer_id` and optional `format`.
///
/// # Returns
///
/// * `Result<Json<AssessmentResponse>, AppError>` - The assessment or an error.
pub async fn assess(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssessRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    tracing::info!(
        "POST /assess - customer_id: {}, format: {}",
        request.customer_id,
        request.format
    );

    let service = AssessmentService::new(
        &state.directory,
        &state.policies,
        &state.chat_client,
        &state.reply_cache,
    );
    let response = service.assess(&request).await?;

    Ok(Json(response))
}

/// Serves the single-page assessment form.
///
/// A dropdown of known customer identifiers, a format selector, and one
/// action button; the summary and the model reply render as two blocks of
/// fixed-width text.
///
/// # Returns
///
/// * `impl IntoResponse` - The HTTP response containing the form page HTML.
pub async fn serve_form_page() -> impl IntoResponse {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>GenAI Loan Risk Assessment</title>
    <style>
        body { font-family: sans-serif; max-width: 900px; margin: 2rem auto; padding: 0 1rem; }
        select, button { font-size: 1rem; padding: 0.4rem 0.8rem; margin-right: 0.5rem; }
        pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }
        .spinner { display: none; margin-left: 0.5rem; }
    </style>
</head>
<body>
    <h1>GenAI Loan Risk Assessment Assistant</h1>
    <p>Select a customer and assess their loan risk with the configured model.</p>
    <div>
        <select id="customer"></select>
        <select id="format">
            <option value="walkthrough">Walkthrough</option>
            <option value="summary">Summary</option>
        </select>
        <button id="assess">Assess Loan Risk</button>
        <span class="spinner" id="spinner">Assessing...</span>
    </div>
    <h2>Customer Summary</h2>
    <pre id="summary"></pre>
    <h2>Model Reply</h2>
    <pre id="reply"></pre>
    <script>
        async function loadCustomers() {
            const res = await fetch('/api/v1/customers');
            const customers = await res.json();
            const select = document.getElementById('customer');
            for (const c of customers) {
                const option = document.createElement('option');
                option.value = c.id;
                option.textContent = c.id + ' - ' + c.name;
                select.appendChild(option);
            }
        }

        document.getElementById('assess').addEventListener('click', async () => {
            const spinner = document.getElementById('spinner');
            spinner.style.display = 'inline';
            try {
                const res = await fetch('/api/v1/assess', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({
                        customer_id: parseInt(document.getElementById('customer').value, 10),
                        format: document.getElementById('format').value,
                    }),
                });
                const data = await res.json();
                if (!res.ok) {
                    document.getElementById('summary').textContent = '';
                    document.getElementById('reply').textContent = 'Error: ' + (data.error || res.status);
                    return;
                }
                document.getElementById('summary').textContent = data.customer_summary;
                document.getElementById('reply').textContent = data.model_reply;
            } finally {
                spinner.style.display = 'none';
            }
        });

        loadCustomers();
    </script>
</body>
</html>
"#;
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}
