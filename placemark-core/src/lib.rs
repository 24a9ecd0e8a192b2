//! Target independent logic of the Placemark front end.
//!
//! Nothing in here touches the network or the DOM,
//! so everything can be tested natively.

pub mod pagination;
pub mod timestamp;
pub mod validate;
