//! One live toast at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Each `show` starts a new generation; an auto-dismiss timer only
/// clears the toast of the generation it was started for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    generation: u64,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.generation += 1;
        self.current = Some(Toast {
            message: message.into(),
            kind,
        });
        self.generation
    }

    /// Timer callback; returns whether the toast was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

/// Transient user feedback.
pub trait Notify {
    fn show(&self, message: &str, kind: ToastKind);

    fn success(&self, message: &str) {
        self.show(message, ToastKind::Success);
    }

    fn error(&self, message: &str) {
        self.show(message, ToastKind::Error);
    }

    fn info(&self, message: &str) {
        self.show(message, ToastKind::Info);
    }
}
