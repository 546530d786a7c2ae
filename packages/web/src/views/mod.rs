mod home;
pub use home::Home;

mod auth;
pub use auth::Auth;

mod verify;
pub use verify::Verify;

mod dashboard;
pub use dashboard::Dashboard;

mod clinician;
pub use clinician::Clinician;

mod admin;
pub use admin::Admin;
