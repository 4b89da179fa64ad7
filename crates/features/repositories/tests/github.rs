use folio_domain::config::RepositoriesConfig;
use folio_repositories::{GithubClient, RepositoryError, RepositoryPanel, RepositorySource, load};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answers each incoming connection with the next canned `(status line, body)` pair.
async fn serve(responses: Vec<(&'static str, &'static str)>) -> GithubClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut buf).await.expect("read request");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            socket.shutdown().await.ok();
        }
    });

    let config =
        RepositoriesConfig { api_base: format!("http://{addr}/"), ..RepositoriesConfig::default() };
    GithubClient::new(&config)
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let client = serve(vec![("404 Not Found", r#"{"message":"Not Found"}"#)]).await;

    let err = client.fetch("nobody", 24).await.expect_err("404 must fail");
    assert!(matches!(err, RepositoryError::Status { status: 404, .. }), "got {err:?}");
    assert!(err.to_string().contains("account 'nobody'"));
}

#[tokio::test]
async fn undecodable_body_maps_to_transport_error() {
    let client = serve(vec![("200 OK", "not json")]).await;

    let err = client.fetch("sameer-at-git", 24).await.expect_err("garbage must fail");
    assert!(matches!(err, RepositoryError::Transport { .. }), "got {err:?}");
    assert!(err.to_string().contains("Decoding repository listing"));
}

#[tokio::test]
async fn listing_is_decoded_into_cards() {
    let client = serve(vec![(
        "200 OK",
        r#"[{"name":"folio","html_url":"https://github.com/sameer-at-git/folio","description":null,"language":"Rust","stargazers_count":5,"forks_count":2}]"#,
    )])
    .await;

    let panel = load(&client, "sameer-at-git", 24).await;
    let card = &panel.cards()[0];
    assert_eq!(card.name, "folio");
    assert_eq!(card.color, "#dea584");
    assert_eq!(card.stars, 5);
}

#[tokio::test]
async fn failed_requests_leave_the_panel_unavailable() {
    let client = serve(vec![("404 Not Found", "{}"), ("200 OK", "not json")]).await;

    assert_eq!(load(&client, "nobody", 24).await, RepositoryPanel::Unavailable);
    assert_eq!(load(&client, "sameer-at-git", 24).await, RepositoryPanel::Unavailable);
}
