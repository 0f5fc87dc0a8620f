//! Turning an inbound message into a relay query.

use poise::serenity_prelude::UserId;

use crate::commands::COMMAND_PREFIX;

/// Whether a message is meant for the bot at all.
///
/// Bot authors are never answered. Direct messages always are. In a server the
/// message has to mention the bot or reply to one of its messages; a reply with
/// the ping turned off does not list the bot in `mentions`, so `replied_to` is
/// checked separately.
pub fn is_addressed(
    author_is_bot: bool,
    in_guild: bool,
    mentions_bot: bool,
    replied_to: Option<UserId>,
    bot_user_id: UserId,
) -> bool {
    if author_is_bot {
        return false;
    }
    !in_guild || mentions_bot || replied_to == Some(bot_user_id)
}

/// Remove every `<@id>` / `<@!id>` mention of the bot, together with one
/// neighbouring space, so the surrounding words keep single spacing.
fn strip_bot_mentions(content: &str, bot_user_id: UserId) -> String {
    let mut stripped = content.to_string();
    for mention in [format!("<@{bot_user_id}>"), format!("<@!{bot_user_id}>")] {
        stripped = stripped
            .replace(&format!("{mention} "), "")
            .replace(&format!(" {mention}"), "")
            .replace(&mention, "");
    }
    stripped
}

/// Returns the text to relay, or `None` when the message should be ignored.
///
/// `addressed` comes from [`is_addressed`].
pub fn extract_query(content: &str, bot_user_id: UserId, addressed: bool) -> Option<String> {
    if !addressed {
        return None;
    }

    let stripped = strip_bot_mentions(content, bot_user_id);
    let query = stripped.trim();
    if query.is_empty() || query.starts_with(COMMAND_PREFIX) {
        return None;
    }

    Some(query.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: UserId = UserId::new(4242);
    const USER: UserId = UserId::new(7);

    #[test]
    fn bot_authors_are_ignored() {
        assert!(!is_addressed(true, false, false, None, BOT));
        assert!(!is_addressed(true, true, true, Some(BOT), BOT));
    }

    #[test]
    fn direct_message_without_mention_is_addressed() {
        assert!(is_addressed(false, false, false, None, BOT));
    }

    #[test]
    fn server_message_without_mention_is_ignored() {
        assert!(!is_addressed(false, true, false, None, BOT));
        assert!(!is_addressed(false, true, false, Some(USER), BOT));
    }

    #[test]
    fn server_mention_is_addressed() {
        assert!(is_addressed(false, true, true, None, BOT));
    }

    #[test]
    fn silent_reply_to_bot_is_addressed() {
        assert!(is_addressed(false, true, false, Some(BOT), BOT));
    }

    #[test]
    fn mention_leaves_no_double_space() {
        assert_eq!(
            extract_query("what does <@4242> think?", BOT, true).as_deref(),
            Some("what does think?")
        );
    }

    #[test]
    fn direct_text_is_relayed_verbatim() {
        assert_eq!(
            extract_query("What is 2+2?", BOT, true).as_deref(),
            Some("What is 2+2?")
        );
    }

    #[test]
    fn unaddressed_messages_are_ignored() {
        assert!(extract_query("What is 2+2?", BOT, false).is_none());
    }

    #[test]
    fn mention_is_stripped() {
        assert_eq!(
            extract_query("<@4242> tell me a joke", BOT, true).as_deref(),
            Some("tell me a joke")
        );
        assert_eq!(
            extract_query("hey <@!4242>, how tall is Everest?", BOT, true).as_deref(),
            Some("hey, how tall is Everest?")
        );
    }

    #[test]
    fn other_mentions_are_kept() {
        assert_eq!(
            extract_query("<@4242> who is <@7>?", BOT, true).as_deref(),
            Some("who is <@7>?")
        );
    }

    #[test]
    fn bare_mention_is_ignored() {
        assert!(extract_query("  <@4242>  ", BOT, true).is_none());
        assert!(extract_query("", BOT, true).is_none());
    }

    #[test]
    fn commands_are_ignored() {
        assert!(extract_query("!start", BOT, true).is_none());
        assert!(extract_query("<@4242> !start", BOT, true).is_none());
    }
}
