use crate::draw::drawer::Drawer;
use crate::segment::store::SegmentStore;
use crate::style::Style;
use crate::tile::{Tile, MAX_ZOOM};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::io::prelude::*;
use std::io::BufReader;
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Serves arrow tiles over HTTP. Tile URLs follow the usual slippy-map
/// scheme, `GET /{zoom}/{x}/{y}.png`.
pub fn run_server(address: &str, store: SegmentStore, style: Style) -> Result<()> {
    let server = Arc::new(HttpServer {
        store,
        style,
        drawer: Drawer::new(),
    });

    let thread_count = num_cpus::get();

    let mut senders: Vec<Sender<TcpStream>> = Vec::new();
    let mut receivers: Vec<Receiver<TcpStream>> = Vec::new();

    for _ in 0..thread_count {
        let (tx, rx) = mpsc::channel();
        senders.push(tx);
        receivers.push(rx);
    }

    let mut handlers = Vec::new();

    for receiver in receivers {
        let server_ref = Arc::clone(&server);
        handlers.push(thread::spawn(move || {
            while let Ok(stream) = receiver.recv() {
                server_ref.handle_connection(stream);
            }
        }));
    }

    let tcp_listener =
        TcpListener::bind(address).with_context(|| format!("Failed to bind to {}", address))?;
    info!(
        "Serving {} segments on {} with {} threads",
        server.store.len(),
        address,
        thread_count
    );

    let mut thread_id = 0;
    for tcp_stream in tcp_listener.incoming() {
        if let Ok(stream) = tcp_stream {
            senders[thread_id].send(stream).unwrap();
            thread_id = (thread_id + 1) % senders.len();
        }
    }

    for h in handlers {
        h.join().unwrap();
    }

    Ok(())
}

struct HttpServer {
    store: SegmentStore,
    style: Style,
    drawer: Drawer,
}

impl HttpServer {
    fn handle_connection(&self, stream: TcpStream) {
        let peer_addr = stream.peer_addr();
        match self.try_handle_connection(stream) {
            Ok(_) => {}
            Err(e) => {
                let peer_addr_str = match peer_addr {
                    Ok(addr) => format!(" from {}", addr),
                    _ => String::new(),
                };
                warn!("Error processing request{}: {}", peer_addr_str, e);
            }
        }
    }

    fn try_handle_connection(&self, stream: TcpStream) -> Result<()> {
        let mut rdr = BufReader::new(stream);

        let first_line = match rdr.by_ref().lines().next() {
            Some(Ok(line)) => line,
            _ => bail!("Failed to read the first line from the TCP stream"),
        };

        let path = extract_path_from_request(&first_line)?;
        let tile = match extract_tile_from_path(&path) {
            Some(tile) => tile,
            _ => bail!("<{}> doesn't look like a valid tile ID", path),
        };

        let segments = self.store.segments_in_tile(&tile, self.style.query_padding());
        let tile_png_bytes = self.drawer.draw_tile(&segments, &tile, &self.style)?;

        let header = [
            "HTTP/1.1 200 OK",
            "Content-Type: image/png",
            &format!("Content-Length: {}", tile_png_bytes.len()),
            "Connection: close",
            "",
            "",
        ]
        .join("\r\n");

        let mut output_stream = rdr.into_inner();

        // Errors at this stage usually happen when the user scrolls the map and the outstanding
        // requests get terminated. We're not interested in reporting these errors, but there's no
        // point in continuing after a write fails either.
        if output_stream.write_all(header.as_bytes()).is_ok() {
            let _ = output_stream.write_all(&tile_png_bytes);
        }

        Ok(())
    }
}

fn extract_path_from_request(first_line: &str) -> Result<String> {
    let tokens: Vec<_> = first_line.split(' ').collect();
    if tokens.len() != 3 {
        bail!("<{}> doesn't look like a valid HTTP request", first_line);
    }
    let method = tokens[0];
    if method != "GET" {
        bail!("Invalid HTTP method: {}", method);
    }
    let http_version = tokens[2];
    if http_version != "HTTP/1.1" && http_version != "HTTP/1.0" {
        bail!("Invalid HTTP version: {}", http_version);
    }
    Ok(tokens[1].to_string())
}

fn extract_tile_from_path(path: &str) -> Option<Tile> {
    let expected_token_count = 3;

    let mut tokens = path
        .trim_end_matches(".png")
        .rsplit('/')
        .take(expected_token_count)
        .collect::<Vec<_>>();

    if tokens.len() != expected_token_count {
        return None;
    }

    tokens.reverse();
    let (z_str, x_str, y_str) = (tokens[0], tokens[1], tokens[2]);

    match (z_str.parse(), x_str.parse(), y_str.parse()) {
        (Ok(z), Ok(x), Ok(y)) if z <= MAX_ZOOM => Some(Tile { zoom: z, x, y }),
        _ => None,
    }
}
