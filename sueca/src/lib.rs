pub use cards::*;
pub use errors::*;
pub use parse::*;
pub use policy::*;
pub use snapshot::*;
pub use trick::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod errors;
mod parse;
mod policy;
mod snapshot;
mod trick;
