//! HTTP client and record sources for countypop.
//!
//! This crate provides the record loading pipeline:
//!
//! - [`url::DEFAULT_ENDPOINT`] - DataUSA population-by-county endpoint
//! - [`FetchClient`] - HTTP client with retries and backoff
//! - [`decode_records`] - Decodes the API payload into records
//! - [`RecordSource`] - Anything that can load a record list
//! - [`HttpSource`] / [`FileSource`] - API and local-file sources

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/countypop/countypop/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod decode;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchClient, FetchError};
pub use decode::{DecodeError, decode_records};
pub use source::{FileSource, HttpSource, RecordSource};
