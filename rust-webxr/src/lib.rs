extern crate rust_webxr_api;
#[macro_use]
extern crate log;
#[cfg(feature = "serde-serialization")]
#[macro_use] extern crate serde_derive;

pub mod api;

pub use rust_webxr_api::*;
