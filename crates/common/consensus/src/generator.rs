use alloy_primitives::B256;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::{debug, info};

use crate::{
    attestation_data::{AttestationData, MAX_COMMITTEE_INDEX},
    bls::BlsScheme,
    error::BenchError,
    signed_attestation::SignedAttestation,
};

/// Builds `count` freshly signed attestations from the operating system's
/// secure random source. Each entry gets its own keypair; the secret keys are
/// dropped as soon as the entry is signed.
pub fn generate(
    scheme: &'static BlsScheme,
    count: usize,
) -> Result<Vec<SignedAttestation>, BenchError> {
    generate_with_rng(scheme, count, &mut OsRng)
}

pub fn generate_with_rng<R: RngCore + CryptoRng>(
    scheme: &'static BlsScheme,
    count: usize,
    rng: &mut R,
) -> Result<Vec<SignedAttestation>, BenchError> {
    if count == 0 {
        return Err(BenchError::ConfigurationError(
            "attestation count must be positive".to_string(),
        ));
    }

    let progress_step = (count / 10).max(1);
    let mut attestations = Vec::with_capacity(count);
    for i in 0..count {
        let data = random_attestation_data(rng)?;

        let secret_key = scheme.generate_secret_key(rng)?;
        let public_key = scheme.derive_public_key(&secret_key);
        let signature = scheme.sign(&secret_key, &data.serialize());

        attestations.push(SignedAttestation::new(data, signature, public_key, scheme));

        if (i + 1) % progress_step == 0 {
            debug!("Generated {}/{} attestations", i + 1, count);
        }
    }

    info!("Generated {} signed attestations", attestations.len());
    Ok(attestations)
}

/// Draws every field at random. The committee index is reduced modulo
/// `MAX_COMMITTEE_INDEX`, keeping the slight modulo bias.
pub fn random_attestation_data<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<AttestationData, BenchError> {
    Ok(AttestationData {
        slot: random_u64(rng)?,
        index: random_u64(rng)? % MAX_COMMITTEE_INDEX,
        beacon_block_root: random_root(rng)?,
        source_epoch: random_u64(rng)?,
        source_root: random_root(rng)?,
        target_epoch: random_u64(rng)?,
        target_root: random_root(rng)?,
    })
}

fn random_u64<R: RngCore>(rng: &mut R) -> Result<u64, BenchError> {
    let mut bytes = [0u8; 8];
    fill(rng, &mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}

fn random_root<R: RngCore>(rng: &mut R) -> Result<B256, BenchError> {
    let mut root = B256::ZERO;
    fill(rng, root.as_mut_slice())?;
    Ok(root)
}

fn fill<R: RngCore>(rng: &mut R, dest: &mut [u8]) -> Result<(), BenchError> {
    rng.try_fill_bytes(dest)
        .map_err(|err| BenchError::SetupFailure(format!("secure random source: {err}")))
}
