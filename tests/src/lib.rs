//! Cross-crate scenarios for the enumeration pipeline. Everything network
//! facing is either mocked in-process or served by a local `wiremock` server.

#[cfg(test)]
mod util;

mod adapters;
mod output;
