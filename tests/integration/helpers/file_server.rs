//! Serves a starter kit over plain HTTP on a local port.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub const KIT_PREFIX: &str = "/react-starter";

/// Header section cap; requests from the fetcher are tiny.
const MAX_HEADER_SIZE: usize = 16 * 1024;

/// The 16 files of the starter kit, keyed by path relative to the kit root.
pub fn kit_files() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        (
            "package.json",
            br#"{ "name": "react-starter", "private": true }"#.to_vec(),
        ),
        ("README.md", b"# Astro React Starter\n".to_vec()),
        (".gitignore", b"node_modules\n/build\n".to_vec()),
        ("src/App.css", b".App { text-align: center; }\n".to_vec()),
        ("src/App.js", b"export default function App() {}\n".to_vec()),
        ("src/App.test.js", b"test('renders', () => {});\n".to_vec()),
        ("src/index.css", b"body { margin: 0; }\n".to_vec()),
        ("src/index.js", b"import App from './App';\n".to_vec()),
        ("src/reportWebVitals.js", b"export default () => {};\n".to_vec()),
        ("src/setupTests.js", b"import '@testing-library/jest-dom';\n".to_vec()),
        ("public/favicon.ico", vec![0, 0, 1, 0, 1, 0, 16, 16, 0, 0, 0xff, 0xfe]),
        ("public/index.html", b"<!DOCTYPE html><div id=\"root\"></div>\n".to_vec()),
        ("public/logo512.png", b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR512".to_vec()),
        ("public/logo192.png", b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR192".to_vec()),
        ("public/manifest.json", br#"{ "short_name": "React App" }"#.to_vec()),
        ("public/robots.txt", b"User-agent: *\nDisallow:\n".to_vec()),
    ]
}

#[derive(Default)]
pub struct StarterServer {
    files: HashMap<String, Vec<u8>>,
    statuses: HashMap<String, u16>,
}

impl StarterServer {
    pub fn with_starter_kit() -> Self {
        let mut server = Self::default();
        for (path, contents) in kit_files() {
            server.files.insert(path.to_string(), contents);
        }
        server
    }

    /// Answer `404` for `path` (relative to the kit root).
    pub fn without(mut self, path: &str) -> Self {
        self.files.remove(path);
        self
    }

    /// Answer `path` with `status` and an empty body; a `3xx` also carries a `Location`.
    pub fn status(mut self, path: &str, status: u16) -> Self {
        self.statuses.insert(path.to_string(), status);
        self
    }

    pub fn start(self) -> RunningServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("cannot bind test server");
        let addr = listener.local_addr().expect("test server has no address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&requests);
        let Self { files, statuses } = self;
        thread::spawn(move || {
            for mut stream in listener.incoming().flatten() {
                serve(&mut stream, &files, &statuses, &log);
            }
        });

        RunningServer {
            base_url: format!("http://{addr}{KIT_PREFIX}/"),
            requests,
        }
    }
}

pub struct RunningServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl RunningServer {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request paths in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested(&self, path: &str) -> bool {
        let wanted = format!("{KIT_PREFIX}/{path}");
        self.requests().iter().any(|r| *r == wanted)
    }
}

fn read_head(stream: &mut TcpStream) -> Option<Vec<u8>> {
    let mut head = Vec::with_capacity(1024);
    let mut byte = [0u8; 1];
    loop {
        match stream.read(&mut byte) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {
                head.push(byte[0]);
                if head.ends_with(b"\r\n\r\n") {
                    return Some(head);
                }
                if head.len() > MAX_HEADER_SIZE {
                    return None;
                }
            }
        }
    }
}

fn serve(
    stream: &mut TcpStream,
    files: &HashMap<String, Vec<u8>>,
    statuses: &HashMap<String, u16>,
    log: &Mutex<Vec<String>>,
) {
    let Some(head) = read_head(stream) else {
        return;
    };

    let mut headers = [httparse::EMPTY_HEADER; 32];
    let mut request = httparse::Request::new(&mut headers);
    let path = match request.parse(&head) {
        Ok(httparse::Status::Complete(_)) => request.path.unwrap_or("/").to_string(),
        _ => return,
    };
    log.lock().unwrap().push(path.clone());

    let relative = path
        .strip_prefix(KIT_PREFIX)
        .and_then(|p| p.strip_prefix('/'))
        .unwrap_or_default();
    let mut extra = String::new();
    let (status, body) = match (statuses.get(relative), files.get(relative)) {
        (Some(&code), _) => {
            if (300..400).contains(&code) {
                extra = format!("Location: {KIT_PREFIX}/package.json\r\n");
            }
            (format!("{code} Status"), Vec::new())
        }
        (None, Some(contents)) => ("200 OK".to_string(), contents.clone()),
        (None, None) => ("404 Not Found".to_string(), b"404: Not Found".to_vec()),
    };

    let head = format!(
        "HTTP/1.1 {status}\r\n{extra}Content-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
}
