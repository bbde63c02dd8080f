use serde::Serialize;
use serde_json::Value;

use crate::domain::{ApiKey, RequestSenderId};

#[derive(Debug, Serialize)]
struct RequestSenderIdJsonRequest<'a> {
    api_key: &'a str,
    sender_id: &'a str,
    usecase: &'a str,
    company: &'a str,
}

pub fn encode_request_sender_id_body(
    api_key: &ApiKey,
    request: &RequestSenderId,
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(RequestSenderIdJsonRequest {
        api_key: api_key.as_str(),
        sender_id: request.sender_id().as_str(),
        usecase: request.use_case().as_str(),
        company: request.company().as_str(),
    })
}
