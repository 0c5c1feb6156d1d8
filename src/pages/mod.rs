//! Page Controllers
//!
//! One component per server-rendered page shell; [`crate::app::App`]
//! mounts exactly one of these based on the body's `data-page` marker.

mod characters;
mod community;
mod compose;
mod forums;
mod index;
mod register;
mod thread;

pub use characters::CharactersPage;
pub use community::CommunityPage;
pub use compose::ComposePage;
pub use forums::MyForumsPage;
pub use index::IndexPage;
pub use register::RegisterPage;
pub use thread::ThreadViewPage;
