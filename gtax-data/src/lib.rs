//! Static country tax tables.
//!
//! One [`CountryProfile`](gtax_core::models::CountryProfile) per supported
//! country, built on first use and shared read-only for the life of the
//! process. The bracket schedules and relief parameters are part of the
//! external contract; tests pin them value by value.

pub mod countries;

pub use countries::{UnknownCountry, all, lookup, profile};
