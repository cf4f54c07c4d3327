use dioxus::prelude::*;
use ui::views::{AppShell, NavItem};

use crate::Route;

/// Navigation frame around the signed-in pages.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();

    // Determine active section from current route
    let route = use_route::<Route>();
    let active = match route {
        Route::Dashboard {} => Some(NavItem::Dashboard),
        Route::Applications {} | Route::ApplicationDetail { .. } => Some(NavItem::Applications),
        Route::Activities {} => Some(NavItem::Activities),
        Route::Profile {} => Some(NavItem::Profile),
        _ => None,
    };

    let on_navigate = move |item: NavItem| {
        let target = match item {
            NavItem::Dashboard => Route::Dashboard {},
            NavItem::Applications => Route::Applications {},
            NavItem::Activities => Route::Activities {},
            NavItem::Profile => Route::Profile {},
        };
        nav.push(target);
    };

    rsx! {
        AppShell {
            active: active,
            on_navigate: on_navigate,
            Outlet::<Route> {}
        }
    }
}
