//! Scripted replies used when the remote model is unavailable

use super::roster::{AgentId, DefaultReply, TeamStats};

/// Deterministic reply for `agent`, chosen by keyword match on `message`.
///
/// Rules are tried in order; the first rule with any keyword contained in the
/// lower-cased message wins.
pub fn scripted_reply(agent: AgentId, message: &str, stats: &TeamStats) -> String {
    let profile = agent.profile();
    let lower = message.to_lowercase();

    if let Some(rule) = profile
        .replies
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
    {
        return rule.reply.to_string();
    }

    match profile.default_reply {
        DefaultReply::Fixed(text) => text.to_string(),
        DefaultReply::TeamStatus => team_status_report(stats),
    }
}

fn team_status_report(stats: &TeamStats) -> String {
    format!(
        "Current team status:\n\
         • Active tasks: {}\n\
         • Completed today: {}\n\
         • Blockers: {}\n\
         • Sprint progress: {}%\n\n\
         {} team members online, {} in Twin Mode. Would you like details on any specific area?",
        stats.active_tasks,
        stats.completed_today,
        stats.blockers,
        stats.sprint_progress,
        stats.online,
        stats.in_twin_mode,
    )
}
