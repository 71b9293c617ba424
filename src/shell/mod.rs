// Composition root for the memos service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete memo store.
// - Wire the store into the use case handlers and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
