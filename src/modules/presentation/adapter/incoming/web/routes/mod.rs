mod get_landing;
mod stream_typewriter;

pub use get_landing::*;
pub use stream_typewriter::*;
