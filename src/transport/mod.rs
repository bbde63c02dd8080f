//! Transport layer: endpoint URLs and wire-format details (serialization/deserialization).

mod endpoint;
mod messaging;
mod phonebook;
mod response;
mod sender_id;

pub use endpoint::{Endpoint, with_api_key_query};
pub use messaging::{
    encode_send_auto_message_body, encode_send_bulk_message_body, encode_send_message_body,
};
pub use phonebook::{encode_create_phonebook_body, encode_update_phonebook_body};
pub use response::decode_json_response;
pub use sender_id::encode_request_sender_id_body;
