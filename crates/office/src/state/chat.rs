//! Per-agent conversation history

use std::collections::BTreeMap;

use serde::Serialize;

use crate::agent::{scripted_reply, AgentId, RemoteAgent, TeamStats};

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Reply came from the scripted table, not the remote model
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub scripted: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            scripted: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            scripted: false,
        }
    }

    fn scripted(text: String) -> Self {
        Self {
            scripted: true,
            ..Self::assistant(text)
        }
    }
}

/// One history per agent, each opened with the agent's greeting
pub struct Conversations {
    threads: BTreeMap<AgentId, Vec<ChatMessage>>,
    remote: RemoteAgent,
    stats: TeamStats,
}

impl Conversations {
    pub fn new(remote: RemoteAgent, stats: TeamStats) -> Self {
        let threads = AgentId::ALL
            .iter()
            .map(|&agent| (agent, greeting(agent)))
            .collect();
        Self {
            threads,
            remote,
            stats,
        }
    }

    pub fn history(&self, agent: AgentId) -> &[ChatMessage] {
        self.threads.get(&agent).map(Vec::as_slice).unwrap_or_default()
    }

    /// Remote replies will be attempted
    pub fn is_remote_enabled(&self) -> bool {
        self.remote.has_api_key()
    }

    pub fn set_api_key(&mut self, key: Option<String>) {
        self.remote.set_api_key(key);
    }

    /// Start `agent`'s conversation over from the greeting
    pub fn clear(&mut self, agent: AgentId) {
        self.threads.insert(agent, greeting(agent));
    }

    /// Send `text` to `agent` and return the reply.
    ///
    /// The remote model is tried first when a key is configured; any failure
    /// falls back to the scripted reply. Both turns land in the agent's
    /// history. Blank input is ignored and yields `None`.
    pub async fn send_message(&mut self, agent: AgentId, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.threads
            .entry(agent)
            .or_insert_with(|| greeting(agent))
            .push(ChatMessage::user(text));

        let remote = if self.remote.has_api_key() {
            let profile = agent.profile();
            match self.remote.reply(profile.personality, self.history(agent)).await {
                Ok(reply) => Some(reply),
                Err(e) => {
                    tracing::warn!("Remote reply for {agent} failed, using scripted reply: {e}");
                    None
                }
            }
        } else {
            None
        };

        let message = match remote {
            Some(reply) => ChatMessage::assistant(reply),
            None => ChatMessage::scripted(scripted_reply(agent, text, &self.stats)),
        };
        let reply = message.text.clone();
        self.threads.entry(agent).or_default().push(message);
        Some(reply)
    }
}

fn greeting(agent: AgentId) -> Vec<ChatMessage> {
    vec![ChatMessage::assistant(agent.profile().greeting)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::settings::AgentSettings;

    fn offline() -> Conversations {
        Conversations::new(RemoteAgent::new(&AgentSettings::default(), None), TeamStats::default())
    }

    fn remote_at(api_url: String) -> Conversations {
        let settings = AgentSettings {
            api_url,
            timeout_secs: 5,
            ..AgentSettings::default()
        };
        Conversations::new(
            RemoteAgent::new(&settings, Some("test-key".into())),
            TeamStats::default(),
        )
    }

    /// Answer one HTTP request on a loopback port with `body`, returning the endpoint URL
    async fn serve_once(body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let content_length = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/v1/messages")
    }

    #[test]
    fn test_every_agent_starts_with_greeting() {
        let chats = offline();
        for agent in AgentId::ALL {
            let history = chats.history(agent);
            assert_eq!(history.len(), 1);
            assert_eq!(history[0].role, ChatRole::Assistant);
            assert_eq!(history[0].text, agent.profile().greeting);
        }
    }

    #[tokio::test]
    async fn test_offline_reply_is_scripted() {
        let mut chats = offline();
        let reply = chats.send_message(AgentId::Sara, "I need access to the repo").await.unwrap();

        assert_eq!(reply, scripted_reply(AgentId::Sara, "I need access to the repo", &TeamStats::default()));
        let history = chats.history(AgentId::Sara);
        assert_eq!(history.len(), 3);
        assert_eq!(history[1], ChatMessage::user("I need access to the repo"));
        assert!(history[2].scripted);
        // Other threads untouched
        assert_eq!(chats.history(AgentId::Kevin).len(), 1);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let settings = AgentSettings {
            api_url: "http://127.0.0.1:9/v1/messages".into(),
            timeout_secs: 2,
            ..AgentSettings::default()
        };
        let mut chats = Conversations::new(
            RemoteAgent::new(&settings, Some("test-key".into())),
            TeamStats::default(),
        );
        assert!(chats.is_remote_enabled());

        let reply = chats.send_message(AgentId::Ad, "status?").await.unwrap();
        assert_eq!(reply, scripted_reply(AgentId::Ad, "status?", &TeamStats::default()));
        assert!(chats.history(AgentId::Ad).last().unwrap().scripted);
    }

    #[tokio::test]
    async fn test_remote_reply_is_used() {
        let url = serve_once(r#"{"content":[{"type":"text","text":"hi"}]}"#).await;
        let mut chats = remote_at(url);

        let reply = chats.send_message(AgentId::Kevin, "hello").await.unwrap();
        assert_eq!(reply, "hi");

        let history = chats.history(AgentId::Kevin);
        let roles: Vec<ChatRole> = history.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
        assert_eq!(history[2], ChatMessage::assistant("hi"));
        assert!(!history[2].scripted);
    }

    #[tokio::test]
    async fn test_remote_reply_without_text_falls_back() {
        let url = serve_once(r#"{"content":[]}"#).await;
        let mut chats = remote_at(url);

        let reply = chats.send_message(AgentId::Julia, "status?").await.unwrap();
        assert_eq!(reply, scripted_reply(AgentId::Julia, "status?", &TeamStats::default()));
        assert!(chats.history(AgentId::Julia).last().unwrap().scripted);
    }

    #[tokio::test]
    async fn test_blank_input_ignored() {
        let mut chats = offline();
        assert!(chats.send_message(AgentId::Al, "   ").await.is_none());
        assert_eq!(chats.history(AgentId::Al).len(), 1);
    }

    #[tokio::test]
    async fn test_history_stays_contiguous() {
        let mut chats = offline();
        chats.send_message(AgentId::Alex, "hello").await;
        chats.send_message(AgentId::Alex, "what are you working on").await;

        let roles: Vec<ChatRole> = chats.history(AgentId::Alex).iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::Assistant
            ]
        );

        chats.clear(AgentId::Alex);
        assert_eq!(chats.history(AgentId::Alex).len(), 1);
    }
}
