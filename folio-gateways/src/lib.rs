//! Gateway implementations for outbound services.

pub mod chat;
