//! Constant values for blscurve
//!
//! This crate holds the fixed parameters of every named curve supported by
//! `blscurve-algorithms`. Values are raw big-endian encodings; nothing here is
//! validated; that happens once in `CurveParams::new`.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod curves;

pub use curves::{CurveConstants, TwistType, BLS12_377, BLS12_381};
