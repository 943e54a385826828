//! Resume editing API — whole-record replacement plus by-id list editing.

pub mod handlers;
