pub const NO_MATCH_MESSAGE: &str = "No images found for the given search query";
pub const NOTICE_DURATION_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration_ms: u32,
}

impl Notice {
    pub fn new(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            message: message.into(),
            duration_ms,
        }
    }

    pub fn no_match(duration_ms: u32) -> Self {
        Self::new(NO_MATCH_MESSAGE, duration_ms)
    }
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

impl<F> Notifier for F
where
    F: Fn(&Notice),
{
    fn notify(&self, notice: &Notice) {
        self(notice)
    }
}
