use std::io;

use termii::{Channel, MessageText, RawPhoneNumber, SendMessage, TermiiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone_raw = std::env::var("TERMII_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TERMII_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("TERMII_MESSAGE")
        .unwrap_or_else(|_| "Hello from the termii demo.".to_owned());

    // TERMII_API_KEY is required; TERMII_SENDER_ID becomes the default `from`.
    let client = TermiiClient::from_env()?;
    let request = SendMessage::builder(RawPhoneNumber::new(phone_raw)?, Channel::Generic)
        .text(MessageText::new(message)?)
        .build()?;

    let response = client.send_message(request).await?;
    println!("{}", response.as_value());

    Ok(())
}
