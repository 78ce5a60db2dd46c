use serde::Deserialize;

/// Path of the solver endpoint, relative to the configured base.
pub const SOLVE_PATH: &str = "/api/q";

/// JSON envelope returned by the solver. The endpoint echoes the submitted
/// literals back as extra fields; they are ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Option<String>,
}

/// Issues the solve request and returns the pre-rendered result fragment.
/// Errors are stringified so they can travel inside a message.
pub async fn fetch_solution(
    endpoint: String,
    a_literal: String,
    b_literal: String,
) -> Result<String, String> {
    let url = format!("{}{}", endpoint.trim_end_matches('/'), SOLVE_PATH);
    let response = reqwest::Client::new()
        .get(&url)
        .query(&[("A", a_literal.as_str()), ("b", b_literal.as_str())])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_else(|_| "".into());
        return Err(format!("{}: {}", status, text));
    }
    let payload = response
        .json::<SolveResponse>()
        .await
        .map_err(|e| e.to_string())?;
    if !payload.success {
        return Err("solver reported failure".to_string());
    }
    payload
        .results
        .ok_or_else(|| "solver response missing results".to_string())
}
