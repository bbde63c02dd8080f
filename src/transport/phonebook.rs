use serde::Serialize;
use serde_json::Value;

use crate::domain::{ApiKey, CreatePhonebook, UpdatePhonebook};

// Shared by create (POST) and update (PATCH); the id of an update travels in the path.
#[derive(Debug, Serialize)]
struct PhonebookJsonRequest<'a> {
    api_key: &'a str,
    phonebook_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

pub fn encode_create_phonebook_body(
    api_key: &ApiKey,
    request: &CreatePhonebook,
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(PhonebookJsonRequest {
        api_key: api_key.as_str(),
        phonebook_name: request.name().as_str(),
        description: request.description_text(),
    })
}

pub fn encode_update_phonebook_body(
    api_key: &ApiKey,
    request: &UpdatePhonebook,
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(PhonebookJsonRequest {
        api_key: api_key.as_str(),
        phonebook_name: request.name().as_str(),
        description: request.description_text(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{PhonebookId, PhonebookName};

    fn key() -> ApiKey {
        ApiKey::new("key").unwrap()
    }

    #[test]
    fn create_body_omits_missing_description() {
        let request = CreatePhonebook::new(PhonebookName::new("Customers").unwrap());
        let body = encode_create_phonebook_body(&key(), &request).unwrap();
        assert_eq!(
            body,
            json!({"api_key": "key", "phonebook_name": "Customers"})
        );
        assert!(body.get("description").is_none());
    }

    #[test]
    fn create_body_keeps_description_unchanged() {
        let request = CreatePhonebook::new(PhonebookName::new("Customers").unwrap())
            .description("Paying customers, Q3");
        let body = encode_create_phonebook_body(&key(), &request).unwrap();
        assert_eq!(body["description"], json!("Paying customers, Q3"));

        let request = CreatePhonebook::new(PhonebookName::new("Customers").unwrap())
            .description("   ");
        let body = encode_create_phonebook_body(&key(), &request).unwrap();
        assert_eq!(body["description"], json!("   "));
    }

    #[test]
    fn update_body_never_sends_empty_description() {
        let request = UpdatePhonebook::new(
            PhonebookId::new("f9c28de9-ab5a").unwrap(),
            PhonebookName::new("Renamed").unwrap(),
        )
        .description("");
        let body = encode_update_phonebook_body(&key(), &request).unwrap();
        assert_eq!(
            body,
            json!({"api_key": "key", "phonebook_name": "Renamed"})
        );
    }
}
