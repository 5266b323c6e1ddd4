//! HTTP front end: the hot entry page and the block rule form.

pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod server;

pub use router::create_router;
pub use server::serve;
