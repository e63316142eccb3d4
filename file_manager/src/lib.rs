pub mod error;
pub mod role_profiles;
pub mod serde_support;
