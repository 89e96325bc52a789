//! Local HTTP fixture server standing in for GitHub, Reddit and Stack Exchange.

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Serves canned bodies keyed by path prefix; unmatched paths get a 404.
/// `{base}` in a body is replaced with the server's own base URL.
pub struct FixtureServer {
    server: Arc<tiny_http::Server>,
    handle: Option<JoinHandle<()>>,
    paths: Arc<Mutex<Vec<String>>>,
    pub base_url: String,
}

impl FixtureServer {
    pub fn start(routes: Vec<(&'static str, u16, String)>) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind fixture server"));
        let port = server.server_addr().to_ip().expect("ip listener").port();
        let base_url = format!("http://127.0.0.1:{port}");
        let paths = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let paths = Arc::clone(&paths);
            let base_url = base_url.clone();
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    let url = request.url().to_string();
                    paths.lock().unwrap().push(url.clone());

                    let (status, body) = routes
                        .iter()
                        .find(|(prefix, _, _)| url.starts_with(prefix))
                        .map_or((404, String::from("not found")), |(_, status, body)| {
                            (*status, body.replace("{base}", &base_url))
                        });
                    let response = tiny_http::Response::from_string(body)
                        .with_status_code(status)
                        .with_header(
                            "Content-Type: application/json"
                                .parse::<tiny_http::Header>()
                                .unwrap(),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            handle: Some(handle),
            paths,
            base_url,
        }
    }

    /// Request paths (with query strings) in arrival order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// A base URL nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";
