use url::Url;

use crate::domain::{ApiKey, PhonebookId};

/// Termii REST endpoints, relative to the client's base URL.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    SenderIds,
    RequestSenderId,
    SendMessage,
    SendBulkMessage,
    SendAutoMessage,
    Phonebooks,
    Phonebook(&'a PhonebookId),
}

impl Endpoint<'_> {
    // Trailing empty segments reproduce the trailing slashes Termii's routes expect.
    fn segments(&self) -> Vec<&str> {
        match self {
            Self::SenderIds => vec!["sender-id"],
            Self::RequestSenderId => vec!["sender-id", "request", ""],
            Self::SendMessage => vec!["sms", "send", ""],
            Self::SendBulkMessage => vec!["sms", "send", "bulk"],
            Self::SendAutoMessage => vec!["sms", "number", "send"],
            Self::Phonebooks => vec!["phonebooks"],
            Self::Phonebook(id) => vec!["phonebooks", id.as_str()],
        }
    }

    /// Join this endpoint onto `base`. Each segment is percent-encoded on its own, so ids
    /// containing `/` or `?` stay inside their segment.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        // `TermiiClientBuilder::build` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(self.segments());
        }
        url
    }
}

/// Append `api_key` as a query parameter (GET/DELETE authentication).
pub fn with_api_key_query(mut url: Url, api_key: &ApiKey) -> Url {
    url.query_pairs_mut()
        .append_pair(ApiKey::FIELD, api_key.as_str());
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.ng.termii.com/api").unwrap()
    }

    #[test]
    fn endpoints_join_onto_base_path() {
        let cases = [
            (Endpoint::SenderIds, "https://api.ng.termii.com/api/sender-id"),
            (
                Endpoint::RequestSenderId,
                "https://api.ng.termii.com/api/sender-id/request/",
            ),
            (Endpoint::SendMessage, "https://api.ng.termii.com/api/sms/send/"),
            (
                Endpoint::SendBulkMessage,
                "https://api.ng.termii.com/api/sms/send/bulk",
            ),
            (
                Endpoint::SendAutoMessage,
                "https://api.ng.termii.com/api/sms/number/send",
            ),
            (Endpoint::Phonebooks, "https://api.ng.termii.com/api/phonebooks"),
        ];

        for (endpoint, expected) in cases {
            assert_eq!(endpoint.url(&base()).as_str(), expected);
        }
    }

    #[test]
    fn base_with_trailing_slash_does_not_double_it() {
        let base = Url::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            Endpoint::Phonebooks.url(&base).as_str(),
            "http://127.0.0.1:8080/phonebooks"
        );

        let base = Url::parse("http://127.0.0.1:8080/api/").unwrap();
        assert_eq!(
            Endpoint::SenderIds.url(&base).as_str(),
            "http://127.0.0.1:8080/api/sender-id"
        );
    }

    #[test]
    fn phonebook_id_is_a_single_encoded_segment() {
        let id = PhonebookId::new("a/b c").unwrap();
        assert_eq!(
            Endpoint::Phonebook(&id).url(&base()).as_str(),
            "https://api.ng.termii.com/api/phonebooks/a%2Fb%20c"
        );
    }

    #[test]
    fn dot_phonebook_ids_never_reach_the_path() {
        assert!(PhonebookId::new("..").is_err());
        assert!(PhonebookId::new(".").is_err());

        let id = PhonebookId::new("...").unwrap();
        assert_eq!(
            Endpoint::Phonebook(&id).url(&base()).as_str(),
            "https://api.ng.termii.com/api/phonebooks/..."
        );
    }

    #[test]
    fn api_key_is_appended_as_query_parameter() {
        let key = ApiKey::new("TL key&1").unwrap();
        let url = with_api_key_query(Endpoint::SenderIds.url(&base()), &key);
        assert_eq!(
            url.as_str(),
            "https://api.ng.termii.com/api/sender-id?api_key=TL+key%261"
        );
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("api_key".to_owned(), "TL key&1".to_owned())]
        );
    }
}
