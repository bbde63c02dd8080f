use termii::{CompanyName, RequestSenderId, SenderId, TermiiClient, UseCase};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TermiiClient::from_env()?;

    let listed = client.list_sender_ids().await?;
    println!("sender ids: {}", listed.as_value());

    // Set TERMII_REQUEST_SENDER_ID to also request a new id.
    if let Ok(sender_id) = std::env::var("TERMII_REQUEST_SENDER_ID") {
        let use_case = std::env::var("TERMII_USE_CASE")
            .unwrap_or_else(|_| "Your verification code is 123456".to_owned());
        let company = std::env::var("TERMII_COMPANY").unwrap_or_else(|_| "No company".to_owned());

        let request = RequestSenderId::new(
            SenderId::new(sender_id)?,
            UseCase::new(use_case)?,
            CompanyName::new(company)?,
        )?;
        let response = client.request_sender_id(request).await?;
        println!("request: {}", response.as_value());
    }

    Ok(())
}
