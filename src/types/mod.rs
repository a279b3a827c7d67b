mod derivative;
mod source;
mod summary;

pub use derivative::{DerivativeFormat, DerivativeSpec, DERIVATIVES};
pub use source::SourceImage;
pub use summary::{Outcome, Summary};
