//! D&B Direct+ request and response types, and the operations that use them.

mod common;
mod company;
mod competitor;
mod contact;
mod institution;
mod token;
mod typeahead;

pub use common::*;
pub use company::*;
pub use competitor::*;
pub use contact::*;
pub use institution::*;
pub use token::*;
pub use typeahead::*;
