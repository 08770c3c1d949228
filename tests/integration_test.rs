//! Tests de integración para el servidor de items
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero, así que
//! el estado inicial (los dos items seed) es siempre el mismo y los
//! tests no interfieren entre sí.

use items_server::config::Config;
use items_server::server::Server;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Levanta un servidor con estado seed en un puerto efímero
fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local_addr");

    let server = Server::new(Config::default());
    thread::spawn(move || {
        let _ = server.serve(listener);
    });

    addr
}

/// Helper: envía un request HTTP crudo y retorna la response completa
fn send_request(
    addr: SocketAddr,
    method: &str,
    path: &str,
    body: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut stream = TcpStream::connect(addr)?;

    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    stream.set_write_timeout(Some(Duration::from_secs(5)))?;

    let request = format!("{} {} HTTP/1.0\r\n\r\n{}", method, path, body);

    stream.write_all(request.as_bytes())?;
    stream.flush()?;
    stream.shutdown(std::net::Shutdown::Write)?;

    let mut response = String::new();
    stream.read_to_string(&mut response)?;

    Ok(response)
}

/// Helper: extrae el body de una response HTTP
fn extract_body(response: &str) -> &str {
    match response.find("\r\n\r\n") {
        Some(pos) => &response[pos + 4..],
        None => "",
    }
}

#[test]
fn test_home_endpoint() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/", "").expect("Failed to send request");

    assert!(response.contains("200 OK"), "Expected 200 OK, got: {}", response);
    assert!(extract_body(&response).contains("Welcome"));
}

#[test]
fn test_status_endpoint() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/status", "").expect("Failed to send request");

    assert!(response.contains("200 OK"));
    let body = extract_body(&response);
    assert!(body.contains("status"));
    assert!(body.contains("running"));
}

#[test]
fn test_list_items_seed_state() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/items", "").expect("Failed to send request");

    assert!(response.contains("200 OK"));

    let items: Vec<serde_json::Value> =
        serde_json::from_str(extract_body(&response)).expect("valid JSON array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[1]["id"], 2);
}

#[test]
fn test_get_item_by_id() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/items/2", "").expect("Failed to send request");

    assert!(response.contains("200 OK"));

    let item: serde_json::Value =
        serde_json::from_str(extract_body(&response)).expect("valid JSON item");
    assert_eq!(item["id"], 2);
    assert_eq!(item["name"], "Item 2");
    assert_eq!(item["description"], "This is item 2");
}

#[test]
fn test_get_missing_item() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/items/99", "").expect("Failed to send request");

    assert!(response.contains("404"), "Expected 404, got: {}", response);
    assert_eq!(
        extract_body(&response),
        r#"{"message": "Item not found"}"#
    );
}

#[test]
fn test_get_non_numeric_id() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/items/abc", "").expect("Failed to send request");

    // Un id no numérico no matchea ningún item
    assert!(response.contains("404"));
    assert!(extract_body(&response).contains("Item not found"));
}

#[test]
fn test_create_item() {
    let addr = start_server();
    let response = send_request(
        addr,
        "POST",
        "/items",
        r#"{"name":"Item 3","description":"d3"}"#,
    )
    .expect("Failed to send request");

    assert!(response.contains("201 Created"), "got: {}", response);

    let item: serde_json::Value =
        serde_json::from_str(extract_body(&response)).expect("valid JSON item");
    assert_eq!(item["id"], 3);
    assert_eq!(item["name"], "Item 3");
    assert_eq!(item["description"], "d3");

    // El item aparece en el listado
    let list = send_request(addr, "GET", "/items", "").expect("Failed to send request");
    let items: Vec<serde_json::Value> =
        serde_json::from_str(extract_body(&list)).expect("valid JSON array");
    assert_eq!(items.len(), 3);
}

#[test]
fn test_create_item_empty_body() {
    let addr = start_server();
    let response = send_request(addr, "POST", "/items", "").expect("Failed to send request");

    // El body vacío se tolera: item sin name ni description
    assert!(response.contains("201 Created"));

    let item: serde_json::Value =
        serde_json::from_str(extract_body(&response)).expect("valid JSON item");
    assert_eq!(item["id"], 3);
    assert!(item.get("name").is_none());
}

#[test]
fn test_update_item_partial() {
    let addr = start_server();
    let response = send_request(addr, "PUT", "/items/1", r#"{"description":"updated"}"#)
        .expect("Failed to send request");

    assert!(response.contains("200 OK"), "got: {}", response);

    let item: serde_json::Value =
        serde_json::from_str(extract_body(&response)).expect("valid JSON item");
    assert_eq!(item["id"], 1);
    assert_eq!(item["name"], "Item 1"); // sin cambios
    assert_eq!(item["description"], "updated");
}

#[test]
fn test_update_item_empty_string_skipped() {
    let addr = start_server();
    let response = send_request(addr, "PUT", "/items/1", r#"{"name":""}"#)
        .expect("Failed to send request");

    assert!(response.contains("200 OK"));

    let item: serde_json::Value =
        serde_json::from_str(extract_body(&response)).expect("valid JSON item");
    assert_eq!(item["name"], "Item 1");
}

#[test]
fn test_update_missing_item() {
    let addr = start_server();
    let response = send_request(addr, "PUT", "/items/99", r#"{"name":"x"}"#)
        .expect("Failed to send request");

    assert!(response.contains("404"));
    assert!(extract_body(&response).contains("Item not found"));
}

#[test]
fn test_delete_item_then_get_fails() {
    let addr = start_server();

    let response = send_request(addr, "DELETE", "/items/2", "").expect("Failed to send request");
    assert!(response.contains("200 OK"), "got: {}", response);
    assert_eq!(
        extract_body(&response),
        r#"{"message": "Item deleted successfully"}"#
    );

    // GET subsecuente retorna 404
    let get = send_request(addr, "GET", "/items/2", "").expect("Failed to send request");
    assert!(get.contains("404"));
}

#[test]
fn test_delete_missing_item() {
    let addr = start_server();
    let response = send_request(addr, "DELETE", "/items/99", "").expect("Failed to send request");

    assert!(response.contains("404"));
    assert!(extract_body(&response).contains("Item not found"));
}

#[test]
fn test_id_not_reused_after_delete() {
    let addr = start_server();

    send_request(addr, "DELETE", "/items/2", "").expect("Failed to send request");
    let response = send_request(addr, "POST", "/items", r#"{"name":"new"}"#)
        .expect("Failed to send request");

    let item: serde_json::Value =
        serde_json::from_str(extract_body(&response)).expect("valid JSON item");
    assert_eq!(item["id"], 3);
}

#[test]
fn test_not_found_route() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/nonexistent", "").expect("Failed to send request");

    assert!(response.contains("404"), "Expected 404 for non-existent route");
    assert!(extract_body(&response).contains("Route not found"));
}

#[test]
fn test_metrics_endpoint() {
    let addr = start_server();

    send_request(addr, "GET", "/items", "").expect("Failed to send request");
    let response = send_request(addr, "GET", "/metrics", "").expect("Failed to send request");

    assert!(response.contains("200 OK"));
    let body = extract_body(&response);
    assert!(body.contains("\"requests\""));
    assert!(body.contains("/items"));
}

#[test]
fn test_multiple_requests_sequentially() {
    let addr = start_server();

    // Verificar que el servidor puede manejar múltiples requests
    for i in 0..5 {
        let response = send_request(addr, "GET", "/items", "").expect("Failed to send request");
        assert!(response.contains("200 OK"), "Request {} failed", i);
    }
}
