mod common;
pub use common::{EmptyState, Field, LoadError, Loading, StatusBadge, TextAreaField};

mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod shell;
pub use shell::{AppShell, NavItem};

mod login;
pub use login::LoginView;

mod auth_callback;
pub use auth_callback::AuthCallbackView;

mod dashboard;
pub use dashboard::DashboardView;

mod applications;
pub use applications::ApplicationsView;

mod application_detail;
pub use application_detail::ApplicationDetailView;

mod application_form;
pub use application_form::ApplicationFormModal;

mod activities;
pub use activities::{ActivitiesView, ActivityItem};

mod activity_form;
pub use activity_form::ActivityFormModal;

mod profile;
pub use profile::ProfileView;
