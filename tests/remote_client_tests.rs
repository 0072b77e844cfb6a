use listslot::model::{Employee, Movie};
use listslot::{CatalogClient, RecordId, RestCrudClient, StoreError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Minimal loopback endpoint: accepts one connection, captures the raw
/// request, answers with a canned JSON response, and closes.
async fn spawn_one_shot_server(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");

        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if let Some(header_end) = find_header_end(&raw) {
                let headers = String::from_utf8_lossy(&raw[..header_end]);
                if raw.len() >= header_end + 4 + content_length(&headers) {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&raw).to_string()
    });

    (format!("http://{}", addr), handle)
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

/// Address of a port that was just released: connecting to it is
/// refused, which stands in for an unreachable endpoint.
async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

fn employee(id: i64, name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

#[tokio::test]
async fn catalog_list_deserializes_the_endpoint_payload() {
    let body = r#"[{
        "id": 1,
        "title": "Arrival",
        "release_date": "2016-11-11",
        "rating": 7.9,
        "poster_url": "https://img/arrival.png",
        "description": "First contact",
        "genres": ["sci-fi", "drama"]
    }]"#;
    let (base_url, server) = spawn_one_shot_server("200 OK", body).await;

    let client = CatalogClient::new(base_url);
    let movies: Vec<Movie> = client.list().await.expect("list movies");

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Arrival");
    assert_eq!(movies[0].genres, vec!["sci-fi".to_string(), "drama".to_string()]);

    let request = server.await.expect("server task");
    assert!(request.starts_with("GET / "));
}

#[tokio::test]
async fn crud_create_posts_the_record_as_json() {
    let (base_url, server) = spawn_one_shot_server("201 Created", "{}").await;

    let client = RestCrudClient::new(base_url);
    client.create(&employee(7, "Ada")).await.expect("create");

    let request = server.await.expect("server task");
    assert!(request.starts_with("POST / "));
    assert!(request.contains("\"name\":\"Ada\""));
}

#[tokio::test]
async fn crud_delete_targets_the_record_url() {
    let (base_url, server) = spawn_one_shot_server("200 OK", "{}").await;

    let client = RestCrudClient::new(base_url);
    client.delete_by_id(&RecordId::Int(7)).await.expect("delete");

    let request = server.await.expect("server task");
    assert!(request.starts_with("DELETE /7 "));
}

#[tokio::test]
async fn transport_failure_on_a_write_surfaces_as_persistence_write_error() {
    let client = RestCrudClient::new(dead_endpoint().await);

    let err = client
        .create(&employee(7, "Ada"))
        .await
        .expect_err("unreachable endpoint must fail");
    assert!(matches!(err, StoreError::PersistenceWrite(_)));

    let err = client
        .delete_by_id(&RecordId::Int(7))
        .await
        .expect_err("unreachable endpoint must fail");
    assert!(matches!(err, StoreError::PersistenceWrite(_)));
}

#[tokio::test]
async fn transport_failure_on_a_read_surfaces_as_fetch_error() {
    let client = CatalogClient::new(dead_endpoint().await);

    let err = client
        .list::<Movie>()
        .await
        .expect_err("unreachable endpoint must fail");
    assert!(matches!(err, StoreError::Fetch(_)));
}

#[tokio::test]
async fn error_status_on_a_write_surfaces_as_persistence_write_error() {
    let (base_url, server) = spawn_one_shot_server("500 Internal Server Error", "{}").await;

    let client = RestCrudClient::new(base_url);
    let err = client
        .update(&RecordId::Int(7), &employee(7, "Ada"))
        .await
        .expect_err("server fault must fail the write");
    assert!(matches!(err, StoreError::PersistenceWrite(_)));

    server.await.expect("server task");
}
