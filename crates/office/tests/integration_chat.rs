//! Integration tests for agent conversations and embedded panels.

use virtual_office_lib::agent::{scripted_reply, AgentId, TeamStats};
use virtual_office_lib::harness::TestHarness;
use virtual_office_lib::state::chat::ChatRole;
use virtual_office_lib::state::EmbedSlot;

#[tokio::test]
async fn test_chat_without_key_uses_scripted_replies() {
    let mut h = TestHarness::new();
    assert!(!h.session.chat.is_remote_enabled());

    let reply = h.session.send_message(AgentId::Ad, "How is the sprint going?").await.unwrap();
    assert_eq!(
        reply,
        scripted_reply(AgentId::Ad, "How is the sprint going?", &TeamStats::default())
    );

    let history = h.session.chat.history(AgentId::Ad);
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].text, AgentId::Ad.profile().greeting);
    assert_eq!(history[1].role, ChatRole::User);
    assert_eq!(history[2].text, reply);
}

#[tokio::test]
async fn test_histories_are_per_agent() {
    let mut h = TestHarness::new();
    h.session.send_message(AgentId::Kevin, "hi").await;
    h.session.send_message(AgentId::Kevin, "any blockers?").await;
    h.session.send_message(AgentId::Julia, "hello").await;

    assert_eq!(h.session.chat.history(AgentId::Kevin).len(), 5);
    assert_eq!(h.session.chat.history(AgentId::Julia).len(), 3);
    assert_eq!(h.session.chat.history(AgentId::Sara).len(), 1);
}

#[test]
fn test_embed_panel_only_for_al_and_ad() {
    let h = TestHarness::new();
    assert_eq!(h.session.embed_panel_for(AgentId::Al), None);

    h.session.set_embed_url(EmbedSlot::Al, "https://figma.com/file/al").unwrap();
    h.session.set_embed_url(EmbedSlot::Ad, "https://figma.com/file/ad").unwrap();

    assert_eq!(
        h.session.embed_panel_for(AgentId::Al).as_deref(),
        Some("https://figma.com/file/al")
    );
    assert_eq!(
        h.session.embed_panel_for(AgentId::Ad).as_deref(),
        Some("https://figma.com/file/ad")
    );
    for agent in [AgentId::Manager, AgentId::Alex, AgentId::Sara] {
        assert_eq!(h.session.embed_panel_for(agent), None);
    }
}

#[test]
fn test_embed_panel_survives_reset() {
    let mut h = TestHarness::new();
    h.session.set_embed_url(EmbedSlot::Ad, "https://figma.com/file/ad").unwrap();
    h.save();

    let pending = h.session.reset_scene();
    h.session.finish_reset(pending);
    h.restart();

    assert_eq!(
        h.session.embed_panel_for(AgentId::Ad).as_deref(),
        Some("https://figma.com/file/ad")
    );
}

#[test]
fn test_tracked_avatars_map_to_agents() {
    let h = TestHarness::new();
    let agents: Vec<AgentId> = h
        .session
        .scene
        .objects
        .ids()
        .filter_map(AgentId::for_tracked_object)
        .collect();

    assert!(agents.contains(&AgentId::Ad));
    assert!(agents.contains(&AgentId::Manager));
    assert!(agents.contains(&AgentId::Julia));
    // Companions beside Sara and Kevin
    assert_eq!(agents.iter().filter(|&&a| a == AgentId::Al).count(), 2);
}
