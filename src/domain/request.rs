use crate::domain::validation::ValidationError;
use crate::domain::value::{
    Channel, CompanyName, Media, MessageText, MessageType, PhonebookId, PhonebookName,
    RawPhoneNumber, SenderId, UseCase,
};

/// Maximum number of destination numbers accepted in one messaging call.
pub const MAX_RECIPIENTS: usize = 100;

/// Allowed length range for a requested alphanumeric sender id.
pub const SENDER_ID_MIN_LEN: usize = 3;
pub const SENDER_ID_MAX_LEN: usize = 11;

/// Minimum length of the `usecase` sample when requesting a sender id.
pub const USE_CASE_MIN_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Destination(s) of a message (`to`).
///
/// A single number goes on the wire as a JSON string, several numbers as a JSON array.
pub enum Recipients {
    One(RawPhoneNumber),
    Many(Vec<RawPhoneNumber>),
}

impl Recipients {
    pub fn one(phone: RawPhoneNumber) -> Self {
        Self::One(phone)
    }

    /// Invariant: `1..=MAX_RECIPIENTS` numbers, order preserved.
    pub fn many(phones: Vec<RawPhoneNumber>) -> Result<Self, ValidationError> {
        if phones.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        if phones.len() > MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: MAX_RECIPIENTS,
                actual: phones.len(),
            });
        }
        Ok(Self::Many(phones))
    }

    /// Number of destination numbers; at least 1 by construction.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(phones) => phones.len(),
        }
    }

    /// Always `false`: both constructors require at least one number.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RawPhoneNumber> for Recipients {
    fn from(value: RawPhoneNumber) -> Self {
        Self::One(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Content of a message. Which variant is present decides the wire field (`sms` or `media`).
pub enum MessageBody {
    Text(MessageText),
    Media(Media),
}

#[derive(Debug, Clone)]
/// `POST /sms/send/`.
///
/// Built with [`SendMessage::builder`]; the body is resolved from the channel at build time.
pub struct SendMessage {
    from: Option<SenderId>,
    to: Recipients,
    message_type: MessageType,
    channel: Channel,
    body: MessageBody,
}

impl SendMessage {
    pub fn builder(to: impl Into<Recipients>, channel: Channel) -> SendMessageBuilder {
        SendMessageBuilder::new(to, channel)
    }

    pub fn from(&self) -> Option<&SenderId> {
        self.from.as_ref()
    }

    pub fn to(&self) -> &Recipients {
        &self.to
    }

    pub fn message_type(&self) -> &MessageType {
        &self.message_type
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SendMessage`].
///
/// `text` and `media` may both be set; [`SendMessageBuilder::build`] keeps only the one the
/// channel uses: `media` for [`Channel::Whatsapp`], `text` for every other channel.
pub struct SendMessageBuilder {
    from: Option<SenderId>,
    to: Recipients,
    message_type: MessageType,
    channel: Channel,
    text: Option<MessageText>,
    media: Option<Media>,
}

impl SendMessageBuilder {
    pub fn new(to: impl Into<Recipients>, channel: Channel) -> Self {
        Self {
            from: None,
            to: to.into(),
            message_type: MessageType::default(),
            channel,
            text: None,
            media: None,
        }
    }

    /// Sender id for this message. Overrides the client's default sender id.
    pub fn from(mut self, sender_id: SenderId) -> Self {
        self.from = Some(sender_id);
        self
    }

    /// Message type (`type`). Defaults to `plain`.
    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Text body, used on every channel except WhatsApp.
    pub fn text(mut self, text: MessageText) -> Self {
        self.text = Some(text);
        self
    }

    /// Media attachment, used only on WhatsApp.
    pub fn media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn build(self) -> Result<SendMessage, ValidationError> {
        let body = match self.channel {
            Channel::Whatsapp => self.media.map(MessageBody::Media).ok_or(
                ValidationError::MissingField {
                    field: Media::FIELD,
                },
            )?,
            Channel::Dnd | Channel::Generic => self.text.map(MessageBody::Text).ok_or(
                ValidationError::MissingField {
                    field: MessageText::FIELD,
                },
            )?,
        };

        Ok(SendMessage {
            from: self.from,
            to: self.to,
            message_type: self.message_type,
            channel: self.channel,
            body,
        })
    }
}

#[derive(Debug, Clone)]
/// `POST /sms/send/bulk`: one text fanned out to many numbers.
pub struct SendBulkMessage {
    from: Option<SenderId>,
    to: Recipients,
    text: MessageText,
    message_type: MessageType,
    channel: Channel,
}

impl SendBulkMessage {
    pub fn new(to: impl Into<Recipients>, text: MessageText, channel: Channel) -> Self {
        Self {
            from: None,
            to: to.into(),
            text,
            message_type: MessageType::default(),
            channel,
        }
    }

    pub fn with_from(mut self, sender_id: SenderId) -> Self {
        self.from = Some(sender_id);
        self
    }

    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn from(&self) -> Option<&SenderId> {
        self.from.as_ref()
    }

    pub fn to(&self) -> &Recipients {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn message_type(&self) -> &MessageType {
        &self.message_type
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

#[derive(Debug, Clone)]
/// `POST /sms/number/send`: send through an auto-generated Termii number.
pub struct SendAutoMessage {
    to: RawPhoneNumber,
    text: MessageText,
}

impl SendAutoMessage {
    pub fn new(to: RawPhoneNumber, text: MessageText) -> Self {
        Self { to, text }
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

#[derive(Debug, Clone)]
/// `POST /sender-id/request/`.
pub struct RequestSenderId {
    sender_id: SenderId,
    use_case: UseCase,
    company: CompanyName,
}

impl RequestSenderId {
    /// Field name of the requested id in the request body (`sender_id`).
    pub const SENDER_ID_FIELD: &'static str = "sender_id";

    /// Invariants:
    /// - an alphanumeric sender id is `SENDER_ID_MIN_LEN..=SENDER_ID_MAX_LEN` characters,
    /// - the use case is at least `USE_CASE_MIN_LEN` characters.
    pub fn new(
        sender_id: SenderId,
        use_case: UseCase,
        company: CompanyName,
    ) -> Result<Self, ValidationError> {
        let sender_len = sender_id.as_str().chars().count();
        if sender_id.is_alphanumeric()
            && !(SENDER_ID_MIN_LEN..=SENDER_ID_MAX_LEN).contains(&sender_len)
        {
            return Err(ValidationError::LengthOutOfRange {
                field: Self::SENDER_ID_FIELD,
                min: SENDER_ID_MIN_LEN,
                max: SENDER_ID_MAX_LEN,
                actual: sender_len,
            });
        }

        let use_case_len = use_case.as_str().chars().count();
        if use_case_len < USE_CASE_MIN_LEN {
            return Err(ValidationError::TooShort {
                field: UseCase::FIELD,
                min: USE_CASE_MIN_LEN,
                actual: use_case_len,
            });
        }

        Ok(Self {
            sender_id,
            use_case,
            company,
        })
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn use_case(&self) -> &UseCase {
        &self.use_case
    }

    pub fn company(&self) -> &CompanyName {
        &self.company
    }
}

#[derive(Debug, Clone)]
/// `POST /phonebooks`.
pub struct CreatePhonebook {
    name: PhonebookName,
    description: Option<String>,
}

impl CreatePhonebook {
    pub fn new(name: PhonebookName) -> Self {
        Self {
            name,
            description: None,
        }
    }

    /// Attach a description, sent unchanged. An empty string is treated as absent.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn name(&self) -> &PhonebookName {
        &self.name
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone)]
/// `PATCH /phonebooks/{id}`.
pub struct UpdatePhonebook {
    id: PhonebookId,
    name: PhonebookName,
    description: Option<String>,
}

impl UpdatePhonebook {
    pub fn new(id: PhonebookId, name: PhonebookName) -> Self {
        Self {
            id,
            name,
            description: None,
        }
    }

    /// Attach a description, sent unchanged. An empty string is treated as absent.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn id(&self) -> &PhonebookId {
        &self.id
    }

    pub fn name(&self) -> &PhonebookName {
        &self.name
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
