//! End-to-end properties of the HTTP chat client against a local listener
//! speaking canned HTTP, without any real chatbot service.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use rentline::client::{
    CONNECT_ERROR_TEXT, ChatReply, ChatService, ClientError, HttpChatService, REPLY_ERROR_TEXT,
};

fn request_complete(raw: &[u8]) -> bool {
    let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };

    let headers = String::from_utf8_lossy(&raw[..pos]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    raw.len() >= pos + 4 + content_length
}

/// Accepts a single connection, captures the full request, and answers
/// with the given status line and body. Returns the captured request.
fn serve_once(listener: TcpListener, status: &'static str, body: &'static str) -> JoinHandle<String> {
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept connection");

        let mut request = Vec::new();
        let mut buf = vec![0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        stream.shutdown().await.ok();

        String::from_utf8(request).expect("request should be UTF-8")
    })
}

fn service_for(listener: &TcpListener) -> HttpChatService {
    let addr = listener.local_addr().expect("listener address");
    HttpChatService::new(format!("http://{addr}")).expect("service")
}

#[tokio::test]
async fn send_posts_exact_message_to_chat_path() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let service = service_for(&listener);
    let server = serve_once(listener, "200 OK", r#"{"response": "Sure, what city?"}"#);

    let reply = service
        .send("I need a car next weekend")
        .await
        .expect("plain reply");

    assert_eq!(reply, ChatReply::Plain("Sure, what city?".to_string()));

    let request = server.await.expect("server task");
    assert!(request.starts_with("POST /chat HTTP/1.1"));
    assert!(
        request
            .to_ascii_lowercase()
            .contains("content-type: application/json")
    );

    let body_start = request.find("\r\n\r\n").expect("request has a body") + 4;
    let body: serde_json::Value =
        serde_json::from_str(&request[body_start..]).expect("body is valid JSON");
    assert_eq!(
        body,
        serde_json::json!({"message": "I need a car next weekend"})
    );
}

#[tokio::test]
async fn structured_reply_carries_card_details() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let service = service_for(&listener);
    let server = serve_once(
        listener,
        "200 OK",
        r#"{"response": {"message": "How about this Corolla?", "car_details": {"brand": "Toyota", "model": "Corolla", "year": 2021, "color": "Blue", "price": "45.00", "location": "Amsterdam"}}}"#,
    );

    let reply = service.send("a blue toyota").await.expect("structured reply");

    assert_eq!(reply.message(), "How about this Corolla?");
    let details = reply.car_details().expect("card details");
    assert_eq!(details.brand, "Toyota");
    assert_eq!(details.year, 2021);
    assert!((details.price - 45.0).abs() < f64::EPSILON);

    server.await.expect("server task");
}

#[tokio::test]
async fn error_body_without_response_field_maps_to_reply_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let service = service_for(&listener);
    let server = serve_once(
        listener,
        "500 Internal Server Error",
        r#"{"error": "An error occurred: database unavailable"}"#,
    );

    let err = service.send("anything").await.unwrap_err();

    assert!(matches!(err, ClientError::EmptyReply));
    assert_eq!(err.user_message(), REPLY_ERROR_TEXT);

    server.await.expect("server task");
}

#[tokio::test]
async fn non_json_body_maps_to_connect_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let service = service_for(&listener);
    let server = serve_once(listener, "502 Bad Gateway", "<html>Bad Gateway</html>");

    let err = service.send("anything").await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
    assert_eq!(err.user_message(), CONNECT_ERROR_TEXT);

    server.await.expect("server task");
}

#[tokio::test]
async fn connection_refused_maps_to_connect_error() {
    // Bind to grab a free port, then drop the listener so nothing answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    let service = HttpChatService::new(format!("http://{addr}")).expect("service");
    let err = service.send("hello").await.unwrap_err();

    assert!(matches!(err, ClientError::Connection(_)));
    assert_eq!(err.user_message(), CONNECT_ERROR_TEXT);
}
