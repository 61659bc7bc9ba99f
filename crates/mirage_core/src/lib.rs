pub mod error;
pub mod ja3;
pub mod profile;
pub mod registry;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use ja3::Ja3Descriptor;
pub use profile::BrowserProfile;
pub use resolver::resolve;
