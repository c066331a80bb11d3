pub mod song;
pub mod status;
pub mod result;

pub use song::*;
pub use status::*;
pub use result::*;
