use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaXmark};
use crate::Icon;

const NOTICE_CSS: Asset = asset!("/assets/styling/notice.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Toast-style messages shown above every page, e.g. for features that are
/// not available yet.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    notices.write().push(level, message);
}

/// Provides the [`Notices`] context and renders the stack.
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let mut notices = use_signal(Notices::default);
    use_context_provider(|| notices);

    let entries = notices().entries().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: NOTICE_CSS }
        {children}
        div {
            class: "notice-stack",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: format!("notice {}", notice.level.class()),
                    role: "status",
                    span { "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        title: "Dismiss",
                        onclick: move |_| notices.write().dismiss(notice.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

/// Inline message box used by the forms.
#[component]
pub fn Alert(level: NoticeLevel, message: String) -> Element {
    rsx! {
        div {
            class: format!("alert {}", level.class()),
            role: "alert",
            match level {
                NoticeLevel::Error => rsx! {
                    Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                },
                NoticeLevel::Success => rsx! {
                    Icon { icon: FaCircleCheck, width: 16, height: 16 }
                },
                NoticeLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
            }
            span { "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notices = Notices::default();
        let first = notices.push(NoticeLevel::Info, "Esta función aún no está disponible");
        let second = notices.push(NoticeLevel::Error, "offline");
        assert_ne!(first, second);
        assert_eq!(notices.entries().len(), 2);

        notices.dismiss(first);
        assert_eq!(notices.entries().len(), 1);
        assert_eq!(notices.entries()[0].message, "offline");

        // Unknown ids are ignored
        notices.dismiss(first);
        assert_eq!(notices.entries().len(), 1);
    }
}
