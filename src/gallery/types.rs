use serde::Serialize;

/// One gallery row: a sampled frame paired with the caption active at its
/// timestamp, ready for a rendering layer to display
#[derive(Serialize, Debug, Clone)]
pub struct GalleryEntry {
    pub timestamp_seconds: f64,
    /// Display clock in HH:MM:SS form
    pub clock: String,
    /// Frame payload, base64-encoded for embedding
    pub image_base64: String,
    /// None exactly when the subtitle sequence had no intervals at all
    pub caption: Option<String>,
}
