// Adapters layer: one module per transport. Each translates between its
// hosting mechanism's request/response representation and the handler
// contract in `core`; neither adds semantics of its own.

// The function adapter is plain serde translation and carries no runtime
// dependency, so it stays available to both shapes (the parity tests in
// tests/ compare it against the router).
pub mod function;

#[cfg(feature = "server")]
pub mod server;
