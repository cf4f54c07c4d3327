mod login;
pub use login::{AuthCallback, Login};

mod pages;
pub use pages::{Activities, ApplicationDetail, Applications, Dashboard, NotFound, Profile};

mod layout;
pub use layout::AppLayout;
