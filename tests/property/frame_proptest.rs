//! Property-based tests for relay wire frames

use callrelay::shared::{InboundFrame, RelayMessage, UserIdentity};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_inbound_frame_yields_message_from_sender(
        to in "[a-z0-9-]{1,36}",
        body in ".*",
        sender in "[a-z0-9-]{1,36}",
    ) {
        let payload = serde_json::json!({"to": to, "message": body}).to_string();
        let frame = InboundFrame::decode(&payload).unwrap();
        let message = frame.into_relay_message(&UserIdentity::new(sender.clone())).unwrap();

        prop_assert_eq!(message.sender.as_str(), sender.as_str());
        prop_assert_eq!(message.recipient.as_str(), to.as_str());
        prop_assert_eq!(message.body, body);
    }

    #[test]
    fn test_frame_without_recipient_is_ignored(body in ".*") {
        let payload = serde_json::json!({"to": "", "message": body}).to_string();
        let frame = InboundFrame::decode(&payload).unwrap();
        prop_assert!(frame.into_relay_message(&UserIdentity::new("alice")).is_none());
    }

    #[test]
    fn test_outbound_frame_has_exactly_three_fields(
        from in "[a-z0-9-]{1,36}",
        to in "[a-z0-9-]{1,36}",
        body in ".*",
    ) {
        let message = RelayMessage::new(from.as_str().into(), to.as_str().into(), body.clone());
        let json: serde_json::Value =
            serde_json::from_str(&message.to_outbound().encode().unwrap()).unwrap();

        let object = json.as_object().unwrap();
        prop_assert_eq!(object.len(), 3);
        prop_assert_eq!(object["from"].as_str(), Some(from.as_str()));
        prop_assert_eq!(object["to"].as_str(), Some(to.as_str()));
        prop_assert_eq!(object["message"].as_str(), Some(body.as_str()));
    }

    #[test]
    fn test_non_object_payload_is_rejected(text in "[^{}\\[\\]\"]*") {
        prop_assert!(InboundFrame::decode(&text).is_err());
    }
}
