pub mod about;
pub mod blog;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
