pub(super) const DEFAULT_CURRENT_CLASS: &str = "current-match";
pub(super) const DEFAULT_OTHER_CLASS: &str = "other-match";
pub(super) const DEFAULT_REPLACED_CLASS: &str = "replaced-match";
pub(super) const DEFAULT_CURRENT_BACKGROUND: &str = "#ffeb3b";
pub(super) const DEFAULT_OTHER_BACKGROUND: &str = "#fff59d";
pub(super) const DEFAULT_REPLACED_BACKGROUND: &str = "#a5d6a7";
pub(super) const DEFAULT_MARKER_TEXT_COLOR: &str = "black";
pub(super) const DEFAULT_SCROLL_INTO_VIEW: bool = true;
pub(super) const DEFAULT_SCROLL_DELAY_MS: u64 = 100;
pub(super) const MAX_SCROLL_DELAY_MS: u64 = 2000;

pub(super) const STATUS_NO_MATCHES: &str = "No matches found";
pub(super) const STATUS_NO_MORE_MATCHES: &str = "No more matches";

pub const DEFAULT_TEXT: &str = "Timely communication through text messages is crucial for maintaining relationships and ensuring clarity. text When you respond promptly, it shows respect for the other person's time and fosters a sense of reliability. This can strengthen connections, whether in personal or professional contexts text.다시

    Additionally, timely texts can prevent misunderstandings and keep conversations flowing smoothly. text Delayed responses may lead to confusion or frustration, which can be easily avoided by simply texting back in a timely manner. Overall, being prompt in your replies enhances communication and builds trust. 다시";
