/// A span `{ index, length }` in byte offsets.
///
/// Which coordinate space it lives in (extracted plain text or HTML source) depends on the stage
/// that produced it; spans from different spaces are never compared without mapping.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub index: usize,
    pub length: usize,
}

impl Match {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    pub fn end(&self) -> usize {
        self.index + self.length
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    Current,
    Other,
    Replaced,
}

impl MarkerKind {
    pub const SEARCH: [MarkerKind; 2] = [MarkerKind::Current, MarkerKind::Other];
    pub const ALL: [MarkerKind; 3] = [MarkerKind::Current, MarkerKind::Other, MarkerKind::Replaced];
}

#[derive(serde::Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRequest {
    pub marker_class: String,
    pub delay_ms: u64,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub id: String,
    pub document_version: u64,
}

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FindStatePayload {
    pub html: String,
    pub occurrence_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
    pub stats: String,
    pub has_selection: bool,
    pub can_replace_all: bool,
    pub document_version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_target: Option<ScrollRequest>,
}

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAllResultPayload {
    pub replaced_count: usize,
    pub state: FindStatePayload,
}
