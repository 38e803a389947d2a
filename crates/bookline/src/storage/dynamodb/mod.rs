//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository
//! trait using `aws-sdk-dynamodb`. Items are flat maps keyed by
//! `appointmentId`, with attribute names matching the service's wire names.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
