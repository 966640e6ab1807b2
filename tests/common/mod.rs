//! Local HTTP fixture server shared by the integration tests.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SIMPLE_HTML: &str = include_str!("../resources/simple.html");
pub const COMPLEX_HTML: &str = include_str!("../resources/complex.html");
pub const NO_HTML_TEXT: &str = include_str!("../resources/no_html.txt");
pub const MINIMAL_HTML: &str = "<h1>Simple Page</h1><p>This is a simple page.</p>";

const CONTENT_TYPE_HTML: &str = "text/html";
const CONTENT_TYPE_PLAIN: &str = "text/plain";

/// Starts a server with the fixture routes mounted
///
/// - `/simple`, `/complex`: HTML pages
/// - `/minimal`: a heading and a single paragraph
/// - `/no_html`: a plain text body
/// - `/empty`: 204 with no body
/// - `/error`: 500 with an HTML body
/// - anything else: 404
pub async fn fixture_server() -> MockServer {
    let server = MockServer::start().await;

    mount(&server, "/simple", html(SIMPLE_HTML)).await;
    mount(&server, "/minimal", html(MINIMAL_HTML)).await;
    mount(&server, "/complex", html(COMPLEX_HTML)).await;
    mount(
        &server,
        "/no_html",
        ResponseTemplate::new(200).set_body_raw(NO_HTML_TEXT, CONTENT_TYPE_PLAIN),
    )
    .await;
    mount(&server, "/empty", ResponseTemplate::new(204)).await;
    mount(
        &server,
        "/error",
        ResponseTemplate::new(500).set_body_raw(
            "<html><body><h1>Internal Server Error</h1></body></html>",
            CONTENT_TYPE_HTML,
        ),
    )
    .await;

    server
}

/// Absolute URL for a path on the fixture server
pub fn url(server: &MockServer, path: &str) -> String {
    format!("{}{}", server.uri(), path)
}

pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), CONTENT_TYPE_HTML)
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}
