use dioxus::prelude::*;

use crate::icons::{FaRightFromBracket, FaUser};
use crate::{use_api, use_auth, use_error_reporter, Icon, LogoutButton};

/// Totals shown on the profile page.
#[derive(Clone, Debug, Default, PartialEq)]
struct ProfileStats {
    applications: u64,
    activities: u64,
    attachments: u64,
}

/// Signed-in account, usage totals and sign out.
#[component]
pub fn ProfileView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let reporter = use_error_reporter();

    let stats = use_resource(move || {
        let api = api.clone();
        async move {
            let overview = match api.dashboard.overview().await {
                Ok(overview) => overview,
                Err(e) => {
                    reporter.report("Failed to load statistics", &e);
                    return ProfileStats::default();
                }
            };
            let attachments = match overview.total_attachments {
                Some(total) => total,
                None => match api.attachments.list_for_user(None).await {
                    Ok(rows) => rows.len() as u64,
                    Err(e) => {
                        tracing::warn!("Attachment count unavailable: {}", e);
                        0
                    }
                },
            };
            ProfileStats {
                applications: overview.total(),
                activities: overview
                    .total_activities
                    .unwrap_or(overview.recent_activities.len() as u64),
                attachments,
            }
        }
    });

    let account = auth().account;
    let name = account
        .as_ref()
        .map(|a| a.display_name().to_string())
        .unwrap_or_else(|| "User".to_string());
    let username = account
        .as_ref()
        .map(|a| a.username.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let totals = stats().unwrap_or_default();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Profile" }

            section {
                class: "card profile-card",
                div { class: "avatar", Icon { width: 28, height: 28, icon: FaUser } }
                div {
                    h2 { class: "profile-name", "{name}" }
                    p { class: "profile-email", "{username}" }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Statistics" }
                div {
                    class: "stat-grid stat-grid-3",
                    div {
                        class: "stat-tile tone-blue",
                        p { class: "stat-value", "{totals.applications}" }
                        p { class: "stat-label", "Total Applications" }
                    }
                    div {
                        class: "stat-tile tone-green",
                        p { class: "stat-value", "{totals.activities}" }
                        p { class: "stat-label", "Total Activities" }
                    }
                    div {
                        class: "stat-tile tone-purple",
                        p { class: "stat-value", "{totals.attachments}" }
                        p { class: "stat-label", "Total Attachments" }
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Account" }
                div {
                    class: "setting-row",
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    div {
                        class: "setting-text",
                        p { class: "strong", "Sign Out" }
                        p { class: "muted", "Sign out of your account" }
                    }
                    LogoutButton { class: "btn btn-outline btn-danger-text" }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Application Information" }
                dl {
                    class: "details",
                    div { class: "detail", dt { "Application Version" } dd { {env!("CARGO_PKG_VERSION")} } }
                    div { class: "detail", dt { "Authentication Provider" } dd { "Microsoft Entra ID" } }
                    div { class: "detail", dt { "User ID" } dd { "{username}" } }
                }
            }
        }
    }
}
