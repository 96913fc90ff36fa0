use std::io;

use websms::{Auth, BinaryMessage, Message, Recipient, WebSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("WEBSMS_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WEBSMS_ACCESS_TOKEN environment variable is required",
        )
    })?;
    let recipient = std::env::var("WEBSMS_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WEBSMS_RECIPIENT environment variable is required",
        )
    })?;

    let auth = Auth::access_token(token)?;
    let mut client = WebSmsClient::new("https://api.websms.com", auth)?;
    client.test(true);

    // two base64-encoded segments, each prefixed with a User Data Header
    let segments = vec![
        "BQAD/AIBWnVzYW1tZW4=".to_owned(),
        "BQAD/AICZ2Vmw7xndA==".to_owned(),
    ];
    let recipients = Recipient::list([recipient])?;
    let message: Message = BinaryMessage::new(recipients, segments, true)?.into();

    let response = client.send(&message, None).await?;
    println!(
        "status: {} {}, transfer id: {:?}",
        response.api_status_code(),
        response.api_status_message(),
        response.transfer_id()
    );
    Ok(())
}
