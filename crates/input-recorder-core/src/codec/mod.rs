//! JSON persistence for event logs.
//!
//! A recording is a JSON array of flat event objects, each with a `type`
//! discriminator (`move`, `click`, `scroll`, `key_press`, `key_release`),
//! the variant's fields and a float `t`:
//!
//! ```json
//! [{"type":"move","x":10,"y":20,"t":0.0},
//!  {"type":"click","x":10,"y":20,"button":"left","pressed":true,"t":0.2}]
//! ```

mod json_codec;

pub use json_codec::{load, save};
