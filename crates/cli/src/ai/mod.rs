//! The study-assistant agent: an LLM provider plus conversation memory
//!
//! [`Agent`] is the CLI's [`Collaborator`]: the workflow hands it a prompt,
//! it sends the system instructions, the remembered turns and the prompt to
//! the configured provider, and records the exchange on success.

pub mod client;
pub mod memory;

use anyhow::{bail, Result};
use mentor_core::config::AIConfig;
use mentor_core::Collaborator;
use std::sync::{Mutex, MutexGuard};

use client::ChatRequest;
use memory::{ConversationMemory, Message};

pub const AGENT_INSTRUCTIONS: &str = r#"你是一个专业的学习助手，帮助学生和自学者解决学习问题。

你负责两类任务：
1. 智能问答：回答数学、物理、化学、编程等学科的问题
2. 代码审查：分析代码质量，给出优化建议和最佳实践

回答时请：
- 给出准确、详细的答案和解释
- 使用清晰易懂的语言，说明解题思路和步骤
- 推荐相关知识点和学习资源
- 对代码问题给出具体的改进建议
- 结合之前的对话内容，提供个性化的学习建议"#;

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    DeepSeek,
    OpenAi,
    Anthropic,
    Ollama,
}

impl Provider {
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "deepseek" => Ok(Provider::DeepSeek),
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "ollama" => Ok(Provider::Ollama),
            other => bail!(
                "Unknown AI provider '{}'. Use deepseek, openai, anthropic or ollama.",
                other
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "DeepSeek",
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Ollama => "Ollama",
        }
    }

    /// Environment variable holding the API key, if the provider needs one
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Provider::DeepSeek => Some("DEEPSEEK_API_KEY"),
            Provider::OpenAi => Some("OPENAI_API_KEY"),
            Provider::Anthropic => Some("ANTHROPIC_API_KEY"),
            Provider::Ollama => None,
        }
    }

    fn default_base_url(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "https://api.deepseek.com",
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::Anthropic => "https://api.anthropic.com/v1",
            Provider::Ollama => "http://localhost:11434",
        }
    }

    /// Full request URL, using `base_url` when configured
    pub fn endpoint(&self, base_url: Option<&str>) -> String {
        let base = base_url
            .unwrap_or_else(|| self.default_base_url())
            .trim_end_matches('/');
        let path = match self {
            Provider::DeepSeek | Provider::OpenAi => "/chat/completions",
            Provider::Anthropic => "/messages",
            Provider::Ollama => "/api/chat",
        };
        format!("{}{}", base, path)
    }
}

/// Resolve the API key: `[ai].api_key` first, then the provider's env var.
/// Ollama is local and needs none.
pub fn resolve_api_key(provider: Provider, config: &AIConfig) -> Option<String> {
    let env_var = provider.api_key_env()?;
    if let Some(key) = &config.api_key {
        if !key.is_empty() {
            return Some(key.clone());
        }
    }
    std::env::var(env_var).ok().filter(|k| !k.is_empty())
}

pub struct Agent {
    config: AIConfig,
    provider: Provider,
    api_key: String,
    memory: Mutex<ConversationMemory>,
}

impl Agent {
    /// Build an agent from `[ai]` config, failing early when no API key is set
    pub fn from_config(config: &AIConfig) -> Result<Self> {
        let provider = Provider::from_name(&config.provider)?;
        let api_key = match (resolve_api_key(provider, config), provider.api_key_env()) {
            (Some(key), _) => key,
            (None, None) => String::new(),
            (None, Some(env_var)) => bail!(
                "No API key found. Set [ai].api_key in .mentor.toml or the {} env var.",
                env_var
            ),
        };

        Ok(Self {
            config: config.clone(),
            provider,
            api_key,
            memory: Mutex::new(ConversationMemory::new(config.memory_turns)),
        })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Remembered turns
    pub fn memory_len(&self) -> usize {
        self.lock_memory().len()
    }

    pub fn clear_memory(&self) {
        self.lock_memory().clear();
    }

    fn lock_memory(&self) -> MutexGuard<'_, ConversationMemory> {
        // A panic mid-record leaves the history usable
        self.memory.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Messages for the next call: history followed by `prompt`
    pub fn conversation(&self, prompt: &str) -> Vec<Message> {
        let mut messages = self.lock_memory().messages();
        messages.push(Message::user(prompt));
        messages
    }
}

impl Collaborator for Agent {
    fn generate(&self, prompt: &str) -> Result<String> {
        let messages = self.conversation(prompt);
        let request = ChatRequest {
            model: &self.config.model,
            system: AGENT_INSTRUCTIONS,
            messages: &messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        let url = self.provider.endpoint(self.config.base_url.as_deref());

        tracing::debug!(
            provider = self.provider.name(),
            model = %self.config.model,
            history = messages.len() - 1,
            "calling provider"
        );

        let response = match self.provider {
            Provider::DeepSeek | Provider::OpenAi => client::call_openai_compatible(
                self.provider.name(),
                &url,
                &self.api_key,
                &request,
            )?,
            Provider::Anthropic => client::call_anthropic(&url, &self.api_key, &request)?,
            Provider::Ollama => client::call_ollama(&url, &request)?,
        };

        tracing::info!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "provider responded"
        );

        self.lock_memory().record(prompt, &response.content);
        Ok(response.content)
    }
}
