pub mod about;
pub mod contact;
pub mod hero;
pub mod home;
pub mod projects;
