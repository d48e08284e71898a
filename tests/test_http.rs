mod common;
pub use common::*;

use reqwest::{
    header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    Client, StatusCode,
};
use serial_test::parallel;

#[tokio::test]
#[parallel]
async fn issue_then_verify_twice() {
    if !server_configured() {
        return;
    }

    // first verification redeems the ticket,
    // second one reports that it has already been used

    let client = Client::new();

    let ticket_id = issue_ticket(&client, "5551234567").await.unwrap();
    assert_eq!(ticket_id.len(), 10);
    assert!(ticket_id.chars().all(|c| c.is_ascii_digit()));

    let response = client
        .get(format!("http://{}/verify/{}", address(), ticket_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Ticket verified"));
    assert!(body.contains("Ana Ruiz"));

    let response = client
        .get(format!("http://{}/verify/{}", address(), ticket_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(response.text().await.unwrap().contains("Ticket already used"));
}

#[tokio::test]
#[parallel]
async fn verify_concurrently_only_one_succeeds() {
    if !server_configured() {
        return;
    }

    let client = Client::new();
    let ticket_id = issue_ticket(&client, "5550000000").await.unwrap();

    let handles = (0..8)
        .map(|_| {
            let client = client.clone();
            let url = format!("http://{}/verify/{}", address(), ticket_id);
            tokio::spawn(async move { client.get(url).send().await.unwrap().status() })
        })
        .collect::<Vec<_>>();

    let mut verified = 0;
    for handle in handles {
        let status = handle.await.unwrap();
        match status {
            StatusCode::OK => verified += 1,
            StatusCode::CONFLICT => {}
            status => panic!("unexpected status {status}"),
        }
    }

    assert_eq!(verified, 1);
}

#[tokio::test]
#[parallel]
async fn verify_never_issued() {
    if !server_configured() {
        return;
    }

    let client = Client::new();

    // ticket ids are digits only, so this one can never be issued
    let response = client
        .get(format!("http://{}/verify/not-a-ticket", address()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().contains("Ticket no válido."));
}

#[tokio::test]
#[parallel]
async fn issue_phone_number_too_long() {
    if !server_configured() {
        return;
    }

    let client = Client::new();

    let response = client
        .post(format!("http://{}/", address()))
        .form(&[
            ("f_name", "Ana"),
            ("l_name", "Ruiz"),
            ("dob", "1990-05-01"),
            ("phone_number", "55512345678"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response
        .text()
        .await
        .unwrap()
        .contains("Phone number cannot be longer than 10 digits"));
}

#[tokio::test]
#[parallel]
async fn issued_ticket_listed() {
    if !server_configured() {
        return;
    }

    let client = Client::new();
    let ticket_id = issue_ticket(&client, "5551112222").await.unwrap();

    let response = client
        .get(format!("http://{}/get", address()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains(&ticket_id));
}

#[tokio::test]
#[parallel]
async fn issued_ticket_qr_code_and_pdf() {
    if !server_configured() {
        return;
    }

    let client = Client::new();
    let ticket_id = issue_ticket(&client, "5553334444").await.unwrap();

    let response = client
        .get(format!("http://{}/qrcodes/{}.png", address(), ticket_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/png");

    let response = client
        .get(format!("http://{}/pdf/{}", address(), ticket_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[CONTENT_DISPOSITION],
        format!("attachment; filename=\"ticket_{ticket_id}.pdf\"").as_str()
    );
    assert!(response.bytes().await.unwrap().starts_with(b"%PDF"));
}

#[tokio::test]
#[parallel]
async fn pdf_never_issued() {
    if !server_configured() {
        return;
    }

    let client = Client::new();

    let response = client
        .get(format!("http://{}/pdf/0", address()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/pdf");
    assert!(response.bytes().await.unwrap().starts_with(b"%PDF"));
}

#[tokio::test]
#[parallel]
async fn get_non_existent_uri() {
    if !server_configured() {
        return;
    }

    let client = Client::new();

    let response = client
        .get(format!("http://{}/this-uri-does-not-exist", address()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
