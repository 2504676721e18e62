use std::io;

use nexmo_sms::{Credentials, NexmoClient, SmsMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("NEXMO_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NEXMO_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("NEXMO_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NEXMO_PASSWORD environment variable is required",
        )
    })?;
    let to = std::env::var("NEXMO_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NEXMO_TO environment variable is required",
        )
    })?;
    let from = std::env::var("NEXMO_FROM").unwrap_or_else(|_| "NexmoDemo".to_owned());
    let text = std::env::var("NEXMO_TEXT")
        .unwrap_or_else(|_| "Hello from the nexmo-sms example.".to_owned());

    let client = NexmoClient::new(Credentials::new(username, password));
    let message = SmsMessage::new(from, to, text);

    let response = client.send_sms(&message).await?;
    println!("{response}");

    Ok(())
}
