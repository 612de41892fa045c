use crate::core::fetch::fetch_json;
use crate::core::Fetch;
use serde_json::Value;

/// Minimal display component: holds the last fetched payload as local state
/// and renders it as serialized JSON text.
///
/// Rendering is retained: `render()` serializes the live state, while
/// `text()` returns the frame committed at construction or by the last
/// `update()`. Mounting populates the state but never commits a frame, so
/// the committed text goes stale until a refresh is forced.
pub struct JsonWidget<F: Fetch> {
    fetcher: F,
    endpoint: String,
    data: Option<Value>,
    frame: String,
}

impl<F: Fetch> JsonWidget<F> {
    pub fn new(fetcher: F, endpoint: String) -> Self {
        let mut widget = Self {
            fetcher,
            endpoint,
            data: None,
            frame: String::new(),
        };
        widget.update();
        widget
    }

    /// Serializes the current state. An unpopulated state serializes as
    /// `null`, the same text an empty payload would produce.
    pub fn render(&self) -> String {
        match &self.data {
            Some(json) => json.to_string(),
            None => Value::Null.to_string(),
        }
    }

    /// The text committed by the last `update()` (or at construction).
    pub fn text(&self) -> &str {
        &self.frame
    }

    /// Commits a fresh render of the current state.
    pub fn update(&mut self) {
        self.frame = self.render();
    }

    /// The live state, for direct instance inspection.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Loads the payload into local state, once. Resolves after the state
    /// is populated (or the fetch has failed and been logged).
    pub async fn mount(&mut self) {
        tracing::debug!("Mounting widget against {}", self.endpoint);
        self.data = fetch_json(&self.fetcher, &self.endpoint).await;
    }
}
