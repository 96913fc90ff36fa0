use std::io;

use websms::{Auth, Message, Recipient, TextMessage, WebSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("WEBSMS_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WEBSMS_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("WEBSMS_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WEBSMS_PASSWORD environment variable is required",
        )
    })?;
    let recipient = std::env::var("WEBSMS_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WEBSMS_RECIPIENT environment variable is required",
        )
    })?;
    let content = std::env::var("WEBSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the websms demo.".to_owned());

    let auth = Auth::user_password(username, password)?;
    let mut client = WebSmsClient::new("https://api.websms.com", auth)?;
    // flip to false to actually deliver
    client.test(true);

    let recipients = Recipient::list([recipient])?;
    let message: Message = TextMessage::new(recipients, content)?.into();

    let response = client.send(&message, None).await?;
    println!(
        "status: {} {}, transfer id: {:?}",
        response.api_status_code(),
        response.api_status_message(),
        response.transfer_id()
    );
    Ok(())
}
