//! Core domain logic for the bookline appointment intake service.
//!
//! This crate is free of HTTP and storage-SDK concerns: it defines the
//! [`appointment`] entity and request payloads, and the [`storage`]
//! repository abstraction that the backend implementations in the server
//! crate plug into.

pub mod appointment;
pub mod storage;
