use reqwest::{Client, StatusCode};
use std::sync::Once;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

///
/// Loads `.env` and tells whether a server address is configured,
/// tests return early when it is not
///
pub fn server_configured() -> bool {
    init_env();

    let configured = std::env::var("QR_TICKETING_BIND_ADDRESS").is_ok();
    if !configured {
        println!("QR_TICKETING_BIND_ADDRESS not set, skipping");
    }

    configured
}

pub fn address() -> String {
    std::env::var("QR_TICKETING_BIND_ADDRESS").unwrap()
}

pub async fn issue_ticket(client: &Client, phone_number: &str) -> anyhow::Result<String> {
    let response = client
        .post(format!("http://{}/", address()))
        .form(&[
            ("f_name", "Ana"),
            ("l_name", "Ruiz"),
            ("dob", "1990-05-01"),
            ("phone_number", phone_number),
        ])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await?;
    let ticket_id = find_ticket_id(&body).ok_or(anyhow::anyhow!("no ticket id in page"))?;

    Ok(ticket_id)
}

///
/// Success page shows the ticket id as the only 10 digit word inside `<strong>`
///
fn find_ticket_id(body: &str) -> Option<String> {
    body.split("<strong>")
        .skip(1)
        .filter_map(|part| part.split("</strong>").next())
        .find(|candidate| candidate.len() == 10 && candidate.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
}
