use std::io;

use termii::{Channel, Media, PhoneNumber, RawPhoneNumber, SendMessage, TermiiClient};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone = PhoneNumber::parse(None, required("TERMII_PHONE")?)?;
    let media_url = required("TERMII_MEDIA_URL")?;
    let caption = std::env::var("TERMII_MEDIA_CAPTION").unwrap_or_default();

    let client = TermiiClient::from_env()?;
    let request = SendMessage::builder(RawPhoneNumber::from(phone), Channel::Whatsapp)
        .media(Media::new(media_url, caption)?)
        .build()?;

    let response = client.send_message(request).await?;
    println!("{}", response.as_value());

    Ok(())
}
