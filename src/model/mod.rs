/// Listing options and filters shared by resource endpoints
pub mod options;
/// Ordered query parameter builder
pub mod query;
/// Uniform failure record
pub mod record;
/// Token endpoint wire types
pub mod token;
