pub mod method;
pub mod node;

pub use method::ApplicationMethod;
pub use node::{Node, Peer};
