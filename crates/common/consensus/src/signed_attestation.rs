use blst::min_pk::{PublicKey, Signature};

use crate::{attestation_data::AttestationData, bls::BlsScheme};

/// Anything the benchmark driver can check repeatedly.
pub trait Verifiable {
    fn verify(&self) -> bool;
}

/// Attestation data together with the signature over its serialized form and
/// the key that produced it. Immutable once generated.
#[derive(Debug, Clone)]
pub struct SignedAttestation {
    pub data: AttestationData,
    pub signature: Signature,
    pub public_key: PublicKey,
    scheme: &'static BlsScheme,
}

impl SignedAttestation {
    pub fn new(
        data: AttestationData,
        signature: Signature,
        public_key: PublicKey,
        scheme: &'static BlsScheme,
    ) -> Self {
        Self {
            data,
            signature,
            public_key,
            scheme,
        }
    }

    /// Verifies the stored signature against arbitrary message bytes instead of
    /// the attestation's own serialization.
    pub fn verify_message(&self, message: &[u8]) -> bool {
        self.scheme.verify(&self.signature, &self.public_key, message)
    }
}

impl Verifiable for SignedAttestation {
    /// Serializes the data afresh on every call, the message is never cached.
    fn verify(&self) -> bool {
        self.verify_message(&self.data.serialize())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;
    use rand::rngs::OsRng;

    use super::*;
    use crate::bls::initialize;

    fn signed(data: AttestationData) -> SignedAttestation {
        let scheme = initialize().unwrap();
        let secret_key = scheme.generate_secret_key(&mut OsRng).unwrap();
        let signature = scheme.sign(&secret_key, &data.serialize());
        SignedAttestation::new(data, signature, scheme.derive_public_key(&secret_key), scheme)
    }

    fn data() -> AttestationData {
        AttestationData {
            slot: 100,
            index: 7,
            beacon_block_root: B256::repeat_byte(1),
            source_epoch: 2,
            source_root: B256::repeat_byte(2),
            target_epoch: 3,
            target_root: B256::repeat_byte(3),
        }
    }

    #[test]
    fn test_verify_own_data() {
        assert!(signed(data()).verify());
    }

    #[test]
    fn test_modified_data_fails() {
        let mut attestation = signed(data());
        attestation.data.target_epoch += 1;

        assert!(!attestation.verify());
    }

    #[test]
    fn test_single_bit_flips_fail() {
        let attestation = signed(data());
        let message = attestation.data.serialize();

        for byte in 0..message.len() {
            let mut tampered = message.clone();
            tampered[byte] ^= 1 << (byte % 8);
            assert!(!attestation.verify_message(&tampered), "flip in byte {byte}");
        }
    }
}
