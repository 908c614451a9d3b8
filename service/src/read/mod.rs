//! Read models definitions.

pub mod dashboard;
pub mod directory;
pub mod realtime;

pub use self::{dashboard::Dashboard, directory::Directory, realtime::Event};
