//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Fire-and-forget user notifications: callers push a
//! title/description/severity triple and the stack component renders and
//! expires them. Ids come from a plain counter so dismissal and ordering
//! stay deterministic.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual weight of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastSeverity {
    #[default]
    Success,
    Warning,
    Error,
}

impl ToastSeverity {
    /// CSS class modifier used by the stack renderer.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            ToastSeverity::Success => "success",
            ToastSeverity::Warning => "warning",
            ToastSeverity::Error => "error",
        }
    }
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: ToastSeverity,
}

/// Ordered queue of live toasts.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    /// Live toasts in arrival order.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id (used by the auto-dismiss timer).
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: ToastSeverity,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
            severity,
        });
        id
    }

    /// Remove a toast by id. Unknown ids are a no-op (the toast may have
    /// been dismissed manually before its timer fired).
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
