//! Blocking HTTP calls to chat-completion providers

use super::memory::Message;
use anyhow::{bail, Result};
use serde_json::{json, Value};
use std::time::Duration;

pub struct ApiResponse {
    pub content: String,
    pub input_tokens: usize,
    pub output_tokens: usize,
}

/// Request parameters shared by every provider
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Client with no request timeout; a slow generation is awaited to the end
fn http_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(Option::<Duration>::None)
        .build()?)
}

fn send(request: reqwest::blocking::RequestBuilder, provider: &str) -> Result<Value> {
    let resp = request.send()?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        bail!("{} API error {}: {}", provider, status, text);
    }

    Ok(resp.json()?)
}

/// OpenAI-style `/chat/completions` (OpenAI and DeepSeek)
pub fn call_openai_compatible(
    provider: &str,
    url: &str,
    api_key: &str,
    request: &ChatRequest<'_>,
) -> Result<ApiResponse> {
    let mut messages = vec![json!({"role": "system", "content": request.system})];
    messages.extend(
        request
            .messages
            .iter()
            .map(|m| json!({"role": m.role, "content": m.content})),
    );

    let body = json!({
        "model": request.model,
        "messages": messages,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
    });

    let json = send(
        http_client()?
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&body),
        provider,
    )?;

    Ok(parse_openai_response(&json))
}

pub fn call_anthropic(url: &str, api_key: &str, request: &ChatRequest<'_>) -> Result<ApiResponse> {
    let body = json!({
        "model": request.model,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
        "system": request.system,
        "messages": request.messages,
    });

    let json = send(
        http_client()?
            .post(url)
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body),
        "Anthropic",
    )?;

    Ok(parse_anthropic_response(&json))
}

pub fn call_ollama(url: &str, request: &ChatRequest<'_>) -> Result<ApiResponse> {
    let mut messages = vec![json!({"role": "system", "content": request.system})];
    messages.extend(
        request
            .messages
            .iter()
            .map(|m| json!({"role": m.role, "content": m.content})),
    );

    let body = json!({
        "model": request.model,
        "messages": messages,
        "stream": false,
        "options": {"temperature": request.temperature},
    });

    let json = send(
        http_client()?
            .post(url)
            .header("content-type", "application/json")
            .json(&body),
        "Ollama",
    )?;

    Ok(parse_ollama_response(&json))
}

pub fn parse_openai_response(json: &Value) -> ApiResponse {
    ApiResponse {
        content: json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string(),
        input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0) as usize,
        output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0) as usize,
    }
}

pub fn parse_anthropic_response(json: &Value) -> ApiResponse {
    ApiResponse {
        content: json["content"][0]["text"].as_str().unwrap_or("").to_string(),
        input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0) as usize,
        output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0) as usize,
    }
}

pub fn parse_ollama_response(json: &Value) -> ApiResponse {
    ApiResponse {
        content: json["message"]["content"].as_str().unwrap_or("").to_string(),
        input_tokens: json["prompt_eval_count"].as_u64().unwrap_or(0) as usize,
        output_tokens: json["eval_count"].as_u64().unwrap_or(0) as usize,
    }
}
