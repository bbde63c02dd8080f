use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Termii API key (`api_key`).
///
/// Invariant: non-empty after trimming. The `Debug` output never shows the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used by Termii (`api_key`), both as query parameter and body field.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender ID shown to recipients as the message origin (`from`).
///
/// Invariant: non-empty after trimming. Registration rules (length, charset) are only
/// checked when requesting a new ID, see [`crate::domain::RequestSenderId`].
pub struct SenderId(String);

impl SenderId {
    /// Body field name used by the messaging endpoints (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the id contains at least one letter (alphanumeric sender id).
    pub fn is_alphanumeric(&self) -> bool {
        self.0.chars().any(char::is_alphabetic)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`sms`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Body field name used by Termii (`sms`).
    pub const FIELD: &'static str = "sms";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Kind of message being sent (`type`), usually `plain`.
pub struct MessageType(String);

impl MessageType {
    /// Body field name used by Termii (`type`).
    pub const FIELD: &'static str = "type";

    const PLAIN: &'static str = "plain";

    /// Create a validated [`MessageType`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The `plain` message type.
    pub fn plain() -> Self {
        Self(Self::PLAIN.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageType {
    fn default() -> Self {
        Self::plain()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery route for a message (`channel`).
pub enum Channel {
    /// High-volume WhatsApp. Messages on this route carry `media` instead of `sms`.
    Whatsapp,
    /// Do-not-disturb bypass route, used for transactional messages.
    Dnd,
    /// Generic promotional route.
    Generic,
}

impl Channel {
    /// Body field name used by Termii (`channel`).
    pub const FIELD: &'static str = "channel";

    /// Wire value (`whatsapp`, `dnd`, `generic`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Dnd => "dnd",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Media attachment for WhatsApp messages (`media`).
///
/// Invariant: `url` is non-empty after trimming; `caption` may be empty.
pub struct Media {
    url: String,
    caption: String,
}

impl Media {
    /// Body field name used by Termii (`media`).
    pub const FIELD: &'static str = "media";

    const URL_FIELD: &'static str = "media.url";

    /// Create a validated [`Media`] attachment.
    pub fn new(url: impl Into<String>, caption: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::URL_FIELD,
            });
        }
        Ok(Self {
            url: trimmed.to_owned(),
            caption: caption.into(),
        })
    }

    /// URL of the file to attach.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Caption shown with the file.
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated destination phone number (`to`).
///
/// Invariant: non-empty after trimming. Termii expects international format without a
/// leading `+` (for example `2349012672711`). This type does not normalize; parse into
/// [`PhoneNumber`] and convert it if you want that done for you.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Body field name used by Termii (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Termii.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert a parsed phone number to Termii's international format (E.164 digits, no `+`).
    fn from(value: PhoneNumber) -> Self {
        Self(value.international().to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Body field name used by Termii (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// E.164 digits without the leading `+`, the format Termii documents for `to`.
    pub fn international(&self) -> &str {
        self.e164.strip_prefix('+').unwrap_or(&self.e164)
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sample of the messages a requested sender id will carry (`usecase`).
///
/// Invariant: non-empty after trimming.
pub struct UseCase(String);

impl UseCase {
    /// Body field name used by Termii (`usecase`).
    pub const FIELD: &'static str = "usecase";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Company that owns a requested sender id (`company`).
pub struct CompanyName(String);

impl CompanyName {
    /// Body field name used by Termii (`company`).
    pub const FIELD: &'static str = "company";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-assigned phonebook id, used as the last path segment of `/phonebooks/{id}`.
///
/// Invariant: non-empty after trimming, and not `.` or `..` (URL joining would resolve
/// those instead of sending them as an id).
pub struct PhonebookId(String);

impl PhonebookId {
    /// Name used in validation errors (the id travels in the path, not in a field).
    pub const FIELD: &'static str = "phonebook_id";

    /// Create a validated [`PhonebookId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed == "." || trimmed == ".." {
            return Err(ValidationError::DotSegment {
                field: Self::FIELD,
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phonebook name (`phonebook_name`).
///
/// Invariant: non-empty after trimming.
pub struct PhonebookName(String);

impl PhonebookName {
    /// Body field name used by Termii (`phonebook_name`).
    pub const FIELD: &'static str = "phonebook_name";

    /// Create a validated [`PhonebookName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
