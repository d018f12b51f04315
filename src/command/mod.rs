mod fragments;
mod now;

pub use fragments::{field, hex, stat, tag};
pub use now::now;
