use super::constants::*;

fn default_scroll_into_view() -> bool {
    DEFAULT_SCROLL_INTO_VIEW
}

fn default_scroll_delay_ms() -> u64 {
    DEFAULT_SCROLL_DELAY_MS
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub current_class: String,
    pub other_class: String,
    pub replaced_class: String,
    pub current_background: String,
    pub other_background: String,
    pub replaced_background: String,
    pub marker_text_color: String,
    #[serde(default = "default_scroll_into_view")]
    pub scroll_into_view: bool,
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialEngineConfig {
    pub(super) current_class: Option<String>,
    pub(super) other_class: Option<String>,
    pub(super) replaced_class: Option<String>,
    pub(super) current_background: Option<String>,
    pub(super) other_background: Option<String>,
    pub(super) replaced_background: Option<String>,
    pub(super) marker_text_color: Option<String>,
    pub(super) scroll_into_view: Option<bool>,
    pub(super) scroll_delay_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            current_class: DEFAULT_CURRENT_CLASS.to_string(),
            other_class: DEFAULT_OTHER_CLASS.to_string(),
            replaced_class: DEFAULT_REPLACED_CLASS.to_string(),
            current_background: DEFAULT_CURRENT_BACKGROUND.to_string(),
            other_background: DEFAULT_OTHER_BACKGROUND.to_string(),
            replaced_background: DEFAULT_REPLACED_BACKGROUND.to_string(),
            marker_text_color: DEFAULT_MARKER_TEXT_COLOR.to_string(),
            scroll_into_view: DEFAULT_SCROLL_INTO_VIEW,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }
}

pub(super) fn is_valid_class_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-'))
}

pub(super) fn normalize_class_name(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(trimmed) if is_valid_class_name(trimmed) => trimmed.to_string(),
        _ => fallback.to_string(),
    }
}

pub(super) fn normalize_color(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() && !trimmed.contains([';', '{', '}']) => {
            trimmed.to_string()
        }
        _ => fallback.to_string(),
    }
}

pub(super) fn normalize_scroll_delay_ms(delay_ms: u64) -> u64 {
    delay_ms.min(MAX_SCROLL_DELAY_MS)
}

pub(super) fn normalize_engine_config(config: EngineConfig) -> EngineConfig {
    let mut current_class =
        normalize_class_name(Some(config.current_class.as_str()), DEFAULT_CURRENT_CLASS);
    let mut other_class = normalize_class_name(Some(config.other_class.as_str()), DEFAULT_OTHER_CLASS);
    let mut replaced_class =
        normalize_class_name(Some(config.replaced_class.as_str()), DEFAULT_REPLACED_CLASS);

    if current_class == other_class || current_class == replaced_class || other_class == replaced_class
    {
        log::warn!("marker classes must be distinct, falling back to defaults");
        current_class = DEFAULT_CURRENT_CLASS.to_string();
        other_class = DEFAULT_OTHER_CLASS.to_string();
        replaced_class = DEFAULT_REPLACED_CLASS.to_string();
    }

    EngineConfig {
        current_class,
        other_class,
        replaced_class,
        current_background: normalize_color(
            Some(config.current_background.as_str()),
            DEFAULT_CURRENT_BACKGROUND,
        ),
        other_background: normalize_color(
            Some(config.other_background.as_str()),
            DEFAULT_OTHER_BACKGROUND,
        ),
        replaced_background: normalize_color(
            Some(config.replaced_background.as_str()),
            DEFAULT_REPLACED_BACKGROUND,
        ),
        marker_text_color: normalize_color(
            Some(config.marker_text_color.as_str()),
            DEFAULT_MARKER_TEXT_COLOR,
        ),
        scroll_into_view: config.scroll_into_view,
        scroll_delay_ms: normalize_scroll_delay_ms(config.scroll_delay_ms),
    }
}

pub(super) fn merge_partial_config(partial: PartialEngineConfig) -> EngineConfig {
    let defaults = EngineConfig::default();

    normalize_engine_config(EngineConfig {
        current_class: partial.current_class.unwrap_or(defaults.current_class),
        other_class: partial.other_class.unwrap_or(defaults.other_class),
        replaced_class: partial.replaced_class.unwrap_or(defaults.replaced_class),
        current_background: partial
            .current_background
            .unwrap_or(defaults.current_background),
        other_background: partial.other_background.unwrap_or(defaults.other_background),
        replaced_background: partial
            .replaced_background
            .unwrap_or(defaults.replaced_background),
        marker_text_color: partial
            .marker_text_color
            .unwrap_or(defaults.marker_text_color),
        scroll_into_view: partial.scroll_into_view.unwrap_or(defaults.scroll_into_view),
        scroll_delay_ms: partial.scroll_delay_ms.unwrap_or(defaults.scroll_delay_ms),
    })
}
