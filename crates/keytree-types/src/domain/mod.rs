pub mod entry;
pub mod key;
pub mod value;

pub use entry::*;
pub use key::*;
pub use value::*;
