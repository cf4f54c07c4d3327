//! Transient notifications for mutation results and failures.

use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Toasts shown at once; older ones are dropped first.
const MAX_TOASTS: usize = 5;
/// Seconds a toast stays up.
const TOAST_SECONDS: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub timestamp: String,
    remaining: u8,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
            timestamp: current_time(),
            remaining: TOAST_SECONDS,
        });
        if self.entries.len() > MAX_TOASTS {
            let excess = self.entries.len() - MAX_TOASTS;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    /// Count every toast down by a second and drop the expired ones.
    pub fn tick(&mut self) {
        for toast in &mut self.entries {
            toast.remaining = toast.remaining.saturating_sub(1);
        }
        self.entries.retain(|t| t.remaining > 0);
    }
}

/// Handle for raising toasts from event handlers and tasks.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn info(self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn success(self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn warning(self, message: impl Into<String>) {
        self.push(ToastLevel::Warning, message);
    }

    pub fn error(self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    fn push(self, level: ToastLevel, message: impl Into<String>) {
        let mut queue = self.queue;
        queue.write().push(level, message);
    }
}

pub fn use_toast() -> Toaster {
    Toaster {
        queue: use_context::<Signal<ToastQueue>>(),
    }
}

/// Provides the toast queue to `children` and renders it above them.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut queue = use_context_provider(|| Signal::new(ToastQueue::default()));

    #[cfg(target_arch = "wasm32")]
    use_future(move || async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if !queue.read().entries.is_empty() {
                queue.write().tick();
            }
        }
    });

    let entries = queue().entries.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Error => "toast error",
                        ToastLevel::Warning => "toast warning",
                        ToastLevel::Success => "toast success",
                        ToastLevel::Info => "toast info",
                    },
                    span { class: "toast-time", "{toast.timestamp}" }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| queue.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_caps_and_dismisses() {
        let mut queue = ToastQueue::default();
        for n in 0..7 {
            queue.push(ToastLevel::Info, format!("toast {n}"));
        }
        assert_eq!(queue.entries.len(), MAX_TOASTS);
        assert_eq!(queue.entries[0].message, "toast 2");

        let id = queue.entries[1].id;
        queue.dismiss(id);
        assert!(queue.entries.iter().all(|t| t.id != id));
    }

    #[test]
    fn test_tick_expires_toasts() {
        let mut queue = ToastQueue::default();
        queue.push(ToastLevel::Error, "Failed to delete application");
        for _ in 0..TOAST_SECONDS - 1 {
            queue.tick();
        }
        assert_eq!(queue.entries.len(), 1);
        queue.tick();
        assert!(queue.entries.is_empty());
    }
}
