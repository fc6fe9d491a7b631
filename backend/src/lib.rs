pub mod config;
pub mod decorations;
pub mod invitation_page;
pub mod routes;
