//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CreatePhonebook, MAX_RECIPIENTS, MessageBody, Recipients, RequestSenderId,
    SENDER_ID_MAX_LEN, SENDER_ID_MIN_LEN, SendAutoMessage, SendBulkMessage, SendMessage,
    SendMessageBuilder, USE_CASE_MIN_LEN, UpdatePhonebook,
};
pub use response::ApiResponse;
pub use validation::ValidationError;
pub use value::{
    ApiKey, Channel, CompanyName, Media, MessageText, MessageType, PhoneNumber, PhonebookId,
    PhonebookName, RawPhoneNumber, SenderId, UseCase,
};
