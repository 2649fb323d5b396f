use std::sync::OnceLock;

use blst::{
    min_pk::{PublicKey, SecretKey, Signature},
    BLST_ERROR,
};
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::error::BenchError;

/// Ethereum proof-of-possession ciphersuite over BLS12-381, signatures in G2.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// `key_gen` rejects input keying material shorter than this.
pub const IKM_LENGTH: usize = 32;

const SELF_CHECK_IKM: [u8; IKM_LENGTH] = [0x42; IKM_LENGTH];
const SELF_CHECK_MESSAGE: &[u8] = b"attbench scheme self check";

static SCHEME: OnceLock<BlsScheme> = OnceLock::new();

/// Process-wide handle on the signature scheme. Obtained through [`initialize`],
/// every key and signature operation goes through it.
#[derive(Debug)]
pub struct BlsScheme {
    dst: &'static [u8],
}

/// Sets up the scheme once for the whole process and hands out the shared
/// instance. The first call runs a sign/verify self check against the curve
/// library; later calls return the already initialized scheme.
pub fn initialize() -> Result<&'static BlsScheme, BenchError> {
    if let Some(scheme) = SCHEME.get() {
        return Ok(scheme);
    }

    let scheme = BlsScheme { dst: DST };
    scheme.self_check()?;
    debug!("BLS12-381 scheme initialized");

    Ok(SCHEME.get_or_init(|| scheme))
}

impl BlsScheme {
    pub fn dst(&self) -> &'static [u8] {
        self.dst
    }

    /// Derives a fresh secret key from 32 bytes of input keying material drawn
    /// from `rng`.
    pub fn generate_secret_key<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<SecretKey, BenchError> {
        let mut ikm = [0u8; IKM_LENGTH];
        rng.try_fill_bytes(&mut ikm)
            .map_err(|err| BenchError::SetupFailure(format!("secure random source: {err}")))?;
        self.secret_key_from_ikm(&ikm)
    }

    fn secret_key_from_ikm(&self, ikm: &[u8]) -> Result<SecretKey, BenchError> {
        SecretKey::key_gen(ikm, &[])
            .map_err(|err| BenchError::SetupFailure(format!("secret key generation: {err:?}")))
    }

    pub fn derive_public_key(&self, secret_key: &SecretKey) -> PublicKey {
        secret_key.sk_to_pk()
    }

    pub fn sign(&self, secret_key: &SecretKey, message: &[u8]) -> Signature {
        secret_key.sign(message, self.dst, &[])
    }

    /// Checks the signature subgroup but not the public key, which is always
    /// one this process derived itself.
    pub fn verify(&self, signature: &Signature, public_key: &PublicKey, message: &[u8]) -> bool {
        let result = signature.verify(true, message, self.dst, &[], public_key, false);
        result == BLST_ERROR::BLST_SUCCESS
    }

    fn self_check(&self) -> Result<(), BenchError> {
        let secret_key = self.secret_key_from_ikm(&SELF_CHECK_IKM)?;
        let public_key = self.derive_public_key(&secret_key);
        let signature = self.sign(&secret_key, SELF_CHECK_MESSAGE);

        if !self.verify(&signature, &public_key, SELF_CHECK_MESSAGE) {
            return Err(BenchError::SetupFailure(
                "curve library rejected a valid signature".to_string(),
            ));
        }

        let mut tampered = SELF_CHECK_MESSAGE.to_vec();
        tampered[0] ^= 1;
        if self.verify(&signature, &public_key, &tampered) {
            return Err(BenchError::SetupFailure(
                "curve library accepted a signature over the wrong message".to_string(),
            ));
        }

        Ok(())
    }
}
