use dioxus::prelude::*;

use super::LoginView;
use crate::icons::{FaBriefcase, FaCalendarDays, FaChartPie, FaUser};
use crate::{use_auth, Icon, LogoutButton};

/// Top-level sections in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Applications,
    Activities,
    Profile,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Dashboard,
        NavItem::Applications,
        NavItem::Activities,
        NavItem::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Applications => "Applications",
            NavItem::Activities => "Activities",
            NavItem::Profile => "Profile",
        }
    }
}

/// Shared page frame: navigation bar, signed-in account and sign out.
///
/// Platform packages map [`NavItem`]s to routes and pass the router outlet as
/// children. Without an account the login page is shown instead.
#[component]
pub fn AppShell(
    active: Option<NavItem>,
    on_navigate: EventHandler<NavItem>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let account = auth().account;

    let Some(account) = account else {
        return rsx! { LoginView {} };
    };

    rsx! {
        div {
            class: "shell",
            nav {
                class: "navbar",
                span { class: "brand", "CareerLog" }
                div {
                    class: "nav-links",
                    for item in NavItem::ALL {
                        button {
                            key: "{item.label()}",
                            class: if active == Some(item) { "nav-link active" } else { "nav-link" },
                            onclick: move |_| on_navigate.call(item),
                            match item {
                                NavItem::Dashboard => rsx! { Icon { width: 14, height: 14, icon: FaChartPie } },
                                NavItem::Applications => rsx! { Icon { width: 14, height: 14, icon: FaBriefcase } },
                                NavItem::Activities => rsx! { Icon { width: 14, height: 14, icon: FaCalendarDays } },
                                NavItem::Profile => rsx! { Icon { width: 14, height: 14, icon: FaUser } },
                            }
                            " {item.label()}"
                        }
                    }
                }
                div {
                    class: "nav-account",
                    span { class: "nav-user", "{account.display_name()}" }
                    LogoutButton { class: "btn btn-outline btn-small" }
                }
            }
            main { class: "content", {children} }
        }
    }
}
