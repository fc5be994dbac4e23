//! Client-side logic
//!
//! Everything here is independent of the terminal front-end. Network-facing
//! pieces take an `ApiClient`; persistence goes through `KeyValueStore`.

pub mod storage;
pub mod history;
pub mod risk;
pub mod forms;
pub mod stress;
pub mod session;
pub mod conversation;
pub mod breathing;
