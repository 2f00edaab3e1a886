pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod loading;
pub mod nav;
pub mod progress_ring;
pub mod projects;
