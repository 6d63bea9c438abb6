/// Plain message type tag.
pub const PLAIN_MESSAGE_TYPE: u8 = 0;

/// Transfer message: a one-byte type tag followed by the payload.
///
/// Only plain messages are constructed here; other tags survive decoding
/// untouched so payloads re-serialize byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    pub message_type: u8,
    pub payload: Vec<u8>,
}

impl Message {
    pub fn plain(text: &str) -> Self {
        Self {
            message_type: PLAIN_MESSAGE_TYPE,
            payload: text.as_bytes().to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self::plain("")
    }

    /// Payload as text, for plain UTF-8 messages.
    pub fn as_text(&self) -> Option<&str> {
        if self.message_type != PLAIN_MESSAGE_TYPE {
            return None;
        }
        std::str::from_utf8(&self.payload).ok()
    }

    /// Encoded length: type tag plus payload.
    pub fn size(&self) -> usize {
        1 + self.payload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_text() {
        let message = Message::plain("Welcome to NEM!");
        assert_eq!(message.as_text(), Some("Welcome to NEM!"));
        assert_eq!(message.size(), 16);
    }

    #[test]
    fn empty_message_has_type_byte() {
        assert_eq!(Message::empty().size(), 1);
    }

    #[test]
    fn non_plain_has_no_text() {
        let message = Message {
            message_type: 1,
            payload: b"ciphertext".to_vec(),
        };
        assert!(message.as_text().is_none());
    }
}
