//! Append-only record of the conversation.

use wisp_common::{Message, Sender};

/// Ordered record of every exchanged message, both turns. Entries are never
/// reordered or removed; the log owns its messages for the session's life.
#[derive(Debug, Default)]
pub struct ConversationLog {
    entries: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text export of the full conversation, oldest first.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let who = match entry.sender {
                Sender::Visitor => "visitor",
                Sender::Bot => "bot",
            };
            out.push_str(&format!(
                "[{}] {}: {}\n",
                entry.sent_at.format("%Y-%m-%d %H:%M:%S"),
                who,
                entry.text
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut log = ConversationLog::new();
        log.append(Message::visitor("first"));
        log.append(Message::bot("second"));
        log.append(Message::bot("third"));

        let texts: Vec<&str> = log.entries().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn new_log_is_empty() {
        let log = ConversationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn transcript_labels_both_senders() {
        let mut log = ConversationLog::new();
        log.append(Message::visitor("hello"));
        log.append(Message::bot("hi"));

        let transcript = log.transcript();
        assert!(transcript.contains("visitor: hello"));
        assert!(transcript.contains("bot: hi"));

        let visitor_line = transcript.find("visitor: hello").unwrap();
        let bot_line = transcript.find("bot: hi").unwrap();
        assert!(visitor_line < bot_line);
    }
}
