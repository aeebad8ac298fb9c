//! Common utilities.

pub mod frameclock;
