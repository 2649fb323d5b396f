use attbench_consensus::{
    bls::initialize, generator::generate, signed_attestation::SignedAttestation,
};

pub fn signed_corpus(count: usize) -> Vec<SignedAttestation> {
    let scheme = initialize().expect("BLS scheme setup failed");
    generate(scheme, count).expect("cannot generate corpus")
}

/// Whether two throughput figures agree within `tolerance` times of each other.
pub fn within_noise(left: f64, right: f64, tolerance: f64) -> bool {
    left > 0.0 && right > 0.0 && left / right <= tolerance && right / left <= tolerance
}
