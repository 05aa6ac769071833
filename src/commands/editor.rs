use std::time::Duration;

use super::types::ScrollRequest;

/// The rich-text editing surface the engine reads from and writes to.
///
/// The engine always reads a full snapshot and writes a full snapshot back.
pub trait EditorHandle {
    fn get_content(&self) -> String;

    fn set_content(&mut self, html: String);

    /// Best-effort request to bring the first element with `marker_class` into view once the
    /// host has re-rendered, `delay` from now. Hosts without scrolling ignore it.
    fn scroll_into_view(&mut self, _marker_class: &str, _delay: Duration) {}
}

/// In-memory editor buffer used by the document registry.
#[derive(Debug, Default)]
pub struct HtmlBuffer {
    content: String,
    version: u64,
    pending_scroll: Option<ScrollRequest>,
}

impl HtmlBuffer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            version: 0,
            pending_scroll: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }
}

impl EditorHandle for HtmlBuffer {
    fn get_content(&self) -> String {
        self.content.clone()
    }

    fn set_content(&mut self, html: String) {
        if html != self.content {
            self.version += 1;
        }
        self.content = html;
    }

    fn scroll_into_view(&mut self, marker_class: &str, delay: Duration) {
        self.pending_scroll = Some(ScrollRequest {
            marker_class: marker_class.to_string(),
            delay_ms: delay.as_millis() as u64,
        });
    }
}
