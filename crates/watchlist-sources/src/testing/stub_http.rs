use std::io::{self, Read, Write};
use std::net::TcpListener;

/// Canned HTTP response served once on a local port, for exercising real
/// clients without reaching the network.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status_line: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl StubResponse {
    pub fn json(status_line: &'static str, body: impl Into<String>) -> Self {
        Self {
            status_line,
            content_type: "application/json",
            body: body.into(),
        }
    }

    pub fn html(status_line: &'static str, body: impl Into<String>) -> Self {
        Self {
            status_line,
            content_type: "text/html",
            body: body.into(),
        }
    }

    fn to_http(&self) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_line,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

/// Bind `127.0.0.1:0`, answer the first request with `response` and return
/// the base URL (`http://127.0.0.1:<port>`).
pub fn serve_once(response: StubResponse) -> io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    std::thread::spawn(move || {
        if let Err(e) = answer(&listener, &response) {
            tracing::warn!(error = %e, "Stub HTTP server failed");
        }
    });

    Ok(format!("http://{}", addr))
}

fn answer(listener: &TcpListener, response: &StubResponse) -> io::Result<()> {
    let (mut stream, _) = listener.accept()?;

    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }

    stream.write_all(response.to_http().as_bytes())?;
    stream.flush()
}
