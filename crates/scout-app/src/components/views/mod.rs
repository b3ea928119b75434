//! Page components, one per route.

mod home;
mod login;
mod movie;
mod profile;
mod signup;

pub use home::HomeView;
pub use login::LoginView;
pub use movie::MovieView;
pub use profile::ProfileView;
pub use signup::SignupView;
