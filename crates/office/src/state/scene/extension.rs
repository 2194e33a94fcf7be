//! Embed URLs for the AL and AD panels, kept under their own keys

use serde::{Deserialize, Serialize};
use shared::SceneSettings;

use super::persistence::SceneStore;
use super::storage::StoreError;
use crate::agent::AgentId;

pub const AL_FIGMA_URL_KEY: &str = "al-figma-url";
pub const AD_FIGMA_URL_KEY: &str = "ad-figma-url";

/// Which panel an embed URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedSlot {
    Al,
    Ad,
}

impl EmbedSlot {
    pub const ALL: [EmbedSlot; 2] = [EmbedSlot::Al, EmbedSlot::Ad];

    /// Storage key of this slot
    pub fn key(&self) -> &'static str {
        match self {
            EmbedSlot::Al => AL_FIGMA_URL_KEY,
            EmbedSlot::Ad => AD_FIGMA_URL_KEY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedSlot::Al => "al",
            EmbedSlot::Ad => "ad",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "al" => Some(EmbedSlot::Al),
            "ad" => Some(EmbedSlot::Ad),
            _ => None,
        }
    }

    /// Slot shown beside a conversation with `agent`, if any
    pub fn for_agent(agent: AgentId) -> Option<Self> {
        match agent {
            AgentId::Al => Some(EmbedSlot::Al),
            AgentId::Ad => Some(EmbedSlot::Ad),
            _ => None,
        }
    }
}

impl std::fmt::Display for EmbedSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both embed URLs as currently stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedUrls {
    pub al: Option<String>,
    pub ad: Option<String>,
}

impl EmbedUrls {
    pub fn get(&self, slot: EmbedSlot) -> Option<&str> {
        match slot {
            EmbedSlot::Al => self.al.as_deref(),
            EmbedSlot::Ad => self.ad.as_deref(),
        }
    }

    /// `settings` with the URLs folded in; absent URLs are left out
    pub fn attach_to(self, settings: SceneSettings) -> SceneSettings {
        SceneSettings {
            al_figma_url: self.al,
            ad_figma_url: self.ad,
            ..settings
        }
    }
}

impl SceneStore {
    /// Stored URL for `slot`; empty values count as unset
    pub fn embed_url(&self, slot: EmbedSlot) -> Option<String> {
        match self.backend().get(slot.key()) {
            Ok(value) => value.filter(|url| !url.trim().is_empty()),
            Err(e) => {
                tracing::error!("Failed to read {}: {e}", slot.key());
                None
            }
        }
    }

    /// Store `url` for `slot`. A blank URL clears the slot.
    pub fn set_embed_url(&self, slot: EmbedSlot, url: &str) -> Result<(), StoreError> {
        let url = url.trim();
        if url.is_empty() {
            return self.clear_embed_url(slot);
        }
        self.backend().set(slot.key(), url).inspect_err(|e| {
            tracing::error!("Failed to store {}: {e}", slot.key());
        })?;
        tracing::info!("Set {} embed URL", slot);
        Ok(())
    }

    pub fn clear_embed_url(&self, slot: EmbedSlot) -> Result<(), StoreError> {
        self.backend().remove(slot.key()).inspect_err(|e| {
            tracing::error!("Failed to clear {}: {e}", slot.key());
        })
    }

    pub fn embed_urls(&self) -> EmbedUrls {
        EmbedUrls {
            al: self.embed_url(EmbedSlot::Al),
            ad: self.embed_url(EmbedSlot::Ad),
        }
    }
}
