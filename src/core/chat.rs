use crate::api::CompletionClient;
use crate::core::conversation::{generate_title, Conversation};
use crate::core::message::Message;
use tracing::warn;

/// Stored in place of a reply when the request fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, something went wrong while processing your message. Check your API key.";

/// Append `input` to `conversation`, ask `client` for a reply with the full
/// history, and append that reply (or [`FALLBACK_REPLY`]).
///
/// Blank input is ignored and returns `None`. The first message of an empty
/// conversation becomes its title.
pub async fn send_message<'c>(
    conversation: &'c mut Conversation,
    input: &str,
    client: &dyn CompletionClient,
) -> Option<&'c Message> {
    if input.trim().is_empty() {
        return None;
    }

    if conversation.messages.is_empty() {
        conversation.title = generate_title(input);
    }
    conversation.messages.push(Message::user(input));

    let reply = match client.complete(&conversation.messages).await {
        Ok(text) => text,
        Err(err) => {
            warn!(conversation = %conversation.id, error = %err, "completion failed");
            FALLBACK_REPLY.to_string()
        }
    };
    conversation.messages.push(Message::assistant(reply));
    conversation.messages.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CompletionError;
    use crate::core::conversation::DEFAULT_TITLE;
    use std::sync::Mutex;

    struct FakeClient {
        reply: Result<String, ()>,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    impl FakeClient {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<Message>> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for FakeClient {
        async fn complete(&self, history: &[Message]) -> Result<String, CompletionError> {
            self.seen.lock().unwrap().push(history.to_vec());
            self.reply
                .clone()
                .map_err(|()| CompletionError::InvalidResponse)
        }
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let client = FakeClient::replying("unused");
        let mut conv = Conversation::new("1");

        assert!(send_message(&mut conv, "  \n\t", &client).await.is_none());
        assert!(conv.messages.is_empty());
        assert_eq!(conv.title, DEFAULT_TITLE);
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn first_message_sets_title_and_reply_is_appended() {
        let client = FakeClient::replying("**Hi** there");
        let mut conv = Conversation::new("1");

        let reply = send_message(&mut conv, "hello", &client).await.cloned();
        assert_eq!(reply, Some(Message::assistant("**Hi** there")));
        assert_eq!(conv.title, "hello");
        assert_eq!(
            conv.messages,
            vec![Message::user("hello"), Message::assistant("**Hi** there")]
        );
    }

    #[tokio::test]
    async fn later_messages_keep_title_and_send_full_history() {
        let client = FakeClient::replying("second answer");
        let mut conv = Conversation::new("1");
        conv.title = "Existing".to_string();
        conv.messages = vec![Message::user("q1"), Message::assistant("a1")];

        send_message(&mut conv, "q2", &client).await;

        assert_eq!(conv.title, "Existing");
        assert_eq!(
            client.calls(),
            vec![vec![
                Message::user("q1"),
                Message::assistant("a1"),
                Message::user("q2"),
            ]]
        );
        assert_eq!(conv.messages.len(), 4);
    }

    #[tokio::test]
    async fn long_first_message_is_truncated_in_title() {
        let client = FakeClient::replying("ok");
        let mut conv = Conversation::new("1");
        let input = "Explain the borrow checker like I am five please";

        send_message(&mut conv, input, &client).await;
        assert_eq!(conv.title, "Explain the borrow checker lik...");
        assert_eq!(conv.messages[0].content, input);
    }

    #[tokio::test]
    async fn failures_store_fallback_reply() {
        let client = FakeClient::failing();
        let mut conv = Conversation::new("1");

        let reply = send_message(&mut conv, "hello", &client).await.cloned();
        assert_eq!(reply, Some(Message::assistant(FALLBACK_REPLY)));
        assert_eq!(conv.messages.len(), 2);
        assert_eq!(conv.title, "hello");
    }
}
