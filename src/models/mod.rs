pub mod api;
pub mod comparison;
pub mod enums;
pub mod outcome;
pub mod record;
pub mod trend;

pub use api::*;
pub use comparison::*;
pub use enums::*;
pub use outcome::*;
pub use record::*;
pub use trend::*;
