use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned response for one request path.
#[derive(Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

pub fn ok_json(body: impl Into<String>) -> StubResponse {
    StubResponse {
        status: 200,
        body: body.into(),
    }
}

pub fn error_response(status: u16, body: impl Into<String>) -> StubResponse {
    StubResponse {
        status,
        body: body.into(),
    }
}

/// Minimal HTTP server standing in for the GitHub API on a loopback port.
///
/// Responses are keyed by request path with the query string stripped.
/// Unknown paths get a GitHub-shaped 404. The listener is torn down when
/// the handle is dropped.
pub struct StubApi {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl StubApi {
    pub async fn start(routes: Vec<(&str, StubResponse)>) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let routes: HashMap<String, StubResponse> = routes
            .into_iter()
            .map(|(path, response)| (path.to_string(), response))
            .collect();

        let handle = tokio::spawn(async move {
            loop {
                let (socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };
                let routes = routes.clone();
                tokio::spawn(serve_connection(socket, routes));
            }
        });

        Ok(StubApi {
            base_url: format!("http://{}", addr),
            handle,
        })
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_connection(mut socket: tokio::net::TcpStream, routes: HashMap<String, StubResponse>) {
    // Requests here are bodyless GETs, so the head is the whole request.
    let mut buf = vec![0u8; 8192];
    let mut read = 0usize;
    loop {
        match socket.read(&mut buf[read..]).await {
            Ok(0) => break,
            Ok(n) => {
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
                if read == buf.len() {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    let head = String::from_utf8_lossy(&buf[..read]);
    let path = head
        .lines()
        .next()
        .unwrap_or("")
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .split('?')
        .next()
        .unwrap_or("/")
        .to_string();

    let response = routes.get(&path).cloned().unwrap_or(StubResponse {
        status: 404,
        body: r#"{"message":"Not Found"}"#.to_string(),
    });
    let reason = match response.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Error",
    };
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    let _ = socket.write_all(payload.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Profile payload in the shape `GET /users/{username}` returns, including
/// fields the client is expected to ignore.
pub fn profile_json(login: &str) -> String {
    json!({
        "login": login,
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "gravatar_id": "",
        "html_url": format!("https://github.com/{}", login),
        "type": "User",
        "site_admin": false,
        "name": "The Octocat",
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "email": null,
        "bio": null,
        "public_repos": 8,
        "public_gists": 8,
        "followers": 12000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z",
        "updated_at": "2024-01-22T12:33:09Z"
    })
    .to_string()
}

/// One entry of a `GET /users/{username}/repos` payload.
pub fn repo_json(
    name: &str,
    stars: u32,
    forks: u32,
    updated: &str,
    language: Option<&str>,
) -> serde_json::Value {
    json!({
        "id": 132935648,
        "name": name,
        "full_name": format!("octocat/{}", name),
        "private": false,
        "html_url": format!("https://github.com/octocat/{}", name),
        "description": format!("The {} project", name),
        "fork": false,
        "language": language,
        "stargazers_count": stars,
        "watchers_count": stars,
        "forks_count": forks,
        "open_issues_count": 0,
        "archived": false,
        "created_at": "2018-05-10T17:51:29Z",
        "updated_at": updated,
        "pushed_at": updated
    })
}

pub fn repos_json(entries: &[serde_json::Value]) -> String {
    serde_json::Value::Array(entries.to_vec()).to_string()
}

/// Scratch path under the system temp directory, unique per process and
/// label so parallel tests do not collide.
pub fn temp_path(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "github-portfolio-test-{}-{}",
        std::process::id(),
        label
    ));
    dir
}
