use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, StatusCode},
    routing::get,
    Router,
};
use bytes::Bytes;
use tokio::{net::TcpListener, task::JoinHandle};

/// PNG signature followed by filler, enough to look like an image
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDRtest-image-payload";

/// Size of the `/large.bin` and `/chunked.bin` bodies
pub const LARGE_BODY_SIZE: usize = 4096;

/// Local HTTP server acting as an image origin
pub struct ImageServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl ImageServer {
    /// Starts the server on a random local port
    pub async fn start() -> Self {
        let router = Router::new()
            .route(
                "/images/cat.png",
                get(|| async { ([(CONTENT_TYPE, "image/png")], PNG_BYTES) }),
            )
            .route(
                "/images/no-type",
                get(|| async { ([(CONTENT_TYPE, "not a mime type")], PNG_BYTES) }),
            )
            .route("/missing.png", get(|| async { StatusCode::NOT_FOUND }))
            .route(
                "/broken.png",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route("/large.bin", get(|| async { vec![7u8; LARGE_BODY_SIZE] }))
            .route(
                "/chunked.bin",
                get(|| async {
                    // Streamed without a Content-Length header
                    let chunks = (0..4).map(|_| {
                        Ok::<_, std::io::Error>(Bytes::from(vec![7u8; LARGE_BODY_SIZE / 4]))
                    });
                    Body::from_stream(futures::stream::iter(chunks))
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind image server");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Image server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Absolute URL of `path` on this server
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for ImageServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
