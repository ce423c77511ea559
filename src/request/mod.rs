//! Request assembly and signing
//!
//! Every call is a flat set of fields plus a `sign` field computed from the
//! sorted fields and the application's shared secret.

pub mod params;
pub mod sign;

pub use params::{ParamValue, Params};
pub use sign::{sign, SIGN_FIELD};
