//! Local HTTP fixture server for crawler tests.

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// A request as seen by the fixture server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

/// Serves canned responses keyed by path prefix. Unmatched paths get a 404.
pub struct FixtureServer {
    server: Arc<tiny_http::Server>,
    handle: Option<JoinHandle<()>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    pub base_url: String,
}

impl FixtureServer {
    pub fn start(routes: Vec<(&'static str, u16, String)>) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind fixture server"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("ip listener")
            .port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    let header = |name: &'static str| {
                        request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv(name))
                            .map(|h| h.value.as_str().to_string())
                    };
                    requests.lock().unwrap().push(Recorded {
                        url: request.url().to_string(),
                        authorization: header("Authorization"),
                        user_agent: header("User-Agent"),
                    });

                    let (status, body) = routes
                        .iter()
                        .find(|(prefix, _, _)| request.url().starts_with(prefix))
                        .map_or((404, String::from("not found")), |(_, status, body)| {
                            (*status, body.clone())
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
            requests,
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
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
