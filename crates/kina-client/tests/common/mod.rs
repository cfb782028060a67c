//! shared fixtures: in-process mock backend and log capture

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use kina_client::BackendEndpoint;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// serve `router` on an ephemeral loopback port
pub async fn spawn_backend(router: Router) -> BackendEndpoint {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    BackendEndpoint::new("127.0.0.1", port).unwrap()
}

/// endpoint on a port nothing listens on
pub async fn dead_endpoint() -> BackendEndpoint {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    BackendEndpoint::new("127.0.0.1", port).unwrap()
}

#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub text: String,
}

struct TextVisitor(String);

impl Visit for TextVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(&format!("{}={:?}", field.name(), value));
    }
}

/// records every event as `field=value` text
#[derive(Clone, Default)]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors_containing(&self, needle: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| e.level == Level::ERROR && e.text.contains(needle))
            .count()
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = TextVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            text: visitor.0,
        });
    }
}
