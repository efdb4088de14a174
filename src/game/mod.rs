pub mod chart;
pub mod events;
pub mod gameplay;
pub mod judgment;
pub mod matcher;
pub mod note;
pub mod selection;
pub mod session;
pub mod song;
pub mod timing;
