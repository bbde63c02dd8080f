//! Typed Rust client for the Termii messaging HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format quirks, and a small client layer issuing one HTTP request per call.
//! Responses are returned as [`ApiResponse`], the JSON body exactly as Termii sent it.
//!
//! ```rust,no_run
//! use termii::{ApiKey, Channel, MessageText, RawPhoneNumber, SendMessage, TermiiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), termii::TermiiError> {
//!     let client = TermiiClient::new(ApiKey::new("...")?)?;
//!     let request = SendMessage::builder(RawPhoneNumber::new("2349012672711")?, Channel::Generic)
//!         .text(MessageText::new("hello")?)
//!         .build()?;
//!     let response = client.send_message(request).await?;
//!     println!("{:?}", response.get("message_id"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{TermiiClient, TermiiClientBuilder, TermiiError};
pub use domain::{
    ApiKey, ApiResponse, Channel, CompanyName, CreatePhonebook, MAX_RECIPIENTS, Media,
    MessageBody, MessageText, MessageType, PhoneNumber, PhonebookId, PhonebookName,
    RawPhoneNumber, Recipients, RequestSenderId, SendAutoMessage, SendBulkMessage, SendMessage,
    SendMessageBuilder, SenderId, UpdatePhonebook, UseCase, ValidationError,
};
