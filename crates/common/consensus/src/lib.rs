pub mod attestation_data;
pub mod bls;
pub mod error;
pub mod generator;
pub mod signed_attestation;
