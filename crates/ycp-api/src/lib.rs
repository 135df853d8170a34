//! HTTP client for the remote coupon-program backend.
//!
//! The backend owns all persistence; this crate only fetches. Wire shapes
//! are camelCase JSON and convert losslessly into `ycp-core` models —
//! conversion is total, missing fields become `None` or empty. Transient
//! network failures are retried with back-off; everything else surfaces
//! immediately as a [`BackendError`].

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::CouponClient;
pub use error::BackendError;
