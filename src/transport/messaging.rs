use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    ApiKey, MessageBody, Recipients, SendAutoMessage, SendBulkMessage, SendMessage, SenderId,
};

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum TransportRecipients<'a> {
    One(&'a str),
    Many(Vec<&'a str>),
}

impl<'a> From<&'a Recipients> for TransportRecipients<'a> {
    fn from(value: &'a Recipients) -> Self {
        match value {
            Recipients::One(phone) => Self::One(phone.raw()),
            Recipients::Many(phones) => Self::Many(phones.iter().map(|it| it.raw()).collect()),
        }
    }
}

#[derive(Debug, Serialize)]
struct TransportMedia<'a> {
    url: &'a str,
    caption: &'a str,
}

#[derive(Debug, Serialize)]
struct SendMessageJsonRequest<'a> {
    api_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    to: TransportRecipients<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sms: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<TransportMedia<'a>>,
    #[serde(rename = "type")]
    message_type: &'a str,
    channel: &'static str,
}

#[derive(Debug, Serialize)]
struct SendBulkMessageJsonRequest<'a> {
    api_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    to: TransportRecipients<'a>,
    sms: &'a str,
    #[serde(rename = "type")]
    message_type: &'a str,
    channel: &'static str,
}

#[derive(Debug, Serialize)]
struct SendAutoMessageJsonRequest<'a> {
    api_key: &'a str,
    to: &'a str,
    sms: &'a str,
}

/// Body for `POST /sms/send/`. Exactly one of `sms`/`media` is present, matching the
/// channel the request was built for.
pub fn encode_send_message_body(
    api_key: &ApiKey,
    default_from: Option<&SenderId>,
    request: &SendMessage,
) -> Result<Value, serde_json::Error> {
    let (sms, media) = match request.body() {
        MessageBody::Text(text) => (Some(text.as_str()), None),
        MessageBody::Media(media) => (
            None,
            Some(TransportMedia {
                url: media.url(),
                caption: media.caption(),
            }),
        ),
    };

    serde_json::to_value(SendMessageJsonRequest {
        api_key: api_key.as_str(),
        from: request.from().or(default_from).map(SenderId::as_str),
        to: request.to().into(),
        sms,
        media,
        message_type: request.message_type().as_str(),
        channel: request.channel().as_str(),
    })
}

pub fn encode_send_bulk_message_body(
    api_key: &ApiKey,
    default_from: Option<&SenderId>,
    request: &SendBulkMessage,
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(SendBulkMessageJsonRequest {
        api_key: api_key.as_str(),
        from: request.from().or(default_from).map(SenderId::as_str),
        to: request.to().into(),
        sms: request.text().as_str(),
        message_type: request.message_type().as_str(),
        channel: request.channel().as_str(),
    })
}

pub fn encode_send_auto_message_body(
    api_key: &ApiKey,
    request: &SendAutoMessage,
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(SendAutoMessageJsonRequest {
        api_key: api_key.as_str(),
        to: request.to().raw(),
        sms: request.text().as_str(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{Channel, Media, MessageText, MessageType, RawPhoneNumber};

    fn key() -> ApiKey {
        ApiKey::new("test_key").unwrap()
    }

    fn phone(raw: &str) -> RawPhoneNumber {
        RawPhoneNumber::new(raw).unwrap()
    }

    #[test]
    fn whatsapp_body_has_media_and_no_sms() {
        let request = SendMessage::builder(phone("2349012672711"), Channel::Whatsapp)
            .from(SenderId::new("Acme").unwrap())
            .text(MessageText::new("dropped").unwrap())
            .media(Media::new("https://media.example.com/file.jpg", "Receipt").unwrap())
            .build()
            .unwrap();

        let body = encode_send_message_body(&key(), None, &request).unwrap();
        assert_eq!(
            body,
            json!({
                "api_key": "test_key",
                "from": "Acme",
                "to": "2349012672711",
                "media": {"url": "https://media.example.com/file.jpg", "caption": "Receipt"},
                "type": "plain",
                "channel": "whatsapp"
            })
        );
        assert!(body.get("sms").is_none());
    }

    #[test]
    fn sms_body_has_text_and_no_media() {
        let request = SendMessage::builder(
            Recipients::many(vec![phone("2349012672711"), phone("23490555546")]).unwrap(),
            Channel::Dnd,
        )
        .text(MessageText::new("hello").unwrap())
        .build()
        .unwrap();

        let body = encode_send_message_body(&key(), None, &request).unwrap();
        assert_eq!(body["sms"], json!("hello"));
        assert_eq!(body["to"], json!(["2349012672711", "23490555546"]));
        assert_eq!(body["channel"], json!("dnd"));
        assert!(body.get("media").is_none());
        assert!(body.get("from").is_none());
    }

    #[test]
    fn default_sender_applies_only_when_request_has_none() {
        let default_from = SenderId::new("Default").unwrap();

        let without_from = SendMessage::builder(phone("2349012672711"), Channel::Generic)
            .text(MessageText::new("hi").unwrap())
            .build()
            .unwrap();
        let body = encode_send_message_body(&key(), Some(&default_from), &without_from).unwrap();
        assert_eq!(body["from"], json!("Default"));

        let with_from = SendMessage::builder(phone("2349012672711"), Channel::Generic)
            .from(SenderId::new("Explicit").unwrap())
            .text(MessageText::new("hi").unwrap())
            .build()
            .unwrap();
        let body = encode_send_message_body(&key(), Some(&default_from), &with_from).unwrap();
        assert_eq!(body["from"], json!("Explicit"));
    }

    #[test]
    fn bulk_body_matches_wire_shape() {
        let request = SendBulkMessage::new(
            Recipients::many(vec![phone("2349012672711"), phone("23490555546")]).unwrap(),
            MessageText::new("sale today").unwrap(),
            Channel::Generic,
        )
        .with_from(SenderId::new("Acme").unwrap())
        .with_message_type(MessageType::new("unicode").unwrap());

        let body = encode_send_bulk_message_body(&key(), None, &request).unwrap();
        assert_eq!(
            body,
            json!({
                "api_key": "test_key",
                "from": "Acme",
                "to": ["2349012672711", "23490555546"],
                "sms": "sale today",
                "type": "unicode",
                "channel": "generic"
            })
        );
    }

    #[test]
    fn auto_message_body_matches_wire_shape() {
        let request = SendAutoMessage::new(
            phone("2349012672711"),
            MessageText::new("your code is 1234").unwrap(),
        );
        let body = encode_send_auto_message_body(&key(), &request).unwrap();
        assert_eq!(
            body,
            json!({
                "api_key": "test_key",
                "to": "2349012672711",
                "sms": "your code is 1234"
            })
        );
    }
}
