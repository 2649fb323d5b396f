use alloy_primitives::B256;
use ssz::Encode;
use ssz_derive::{Decode, Encode};

/// Length of the signing message: three `u64`s and three 32-byte roots.
pub const SIGNING_MESSAGE_LENGTH: usize = 128;

/// Committee indices are drawn from `[0, MAX_COMMITTEE_INDEX)`.
pub const MAX_COMMITTEE_INDEX: u64 = 65536;

/// Simplified consensus vote. The flat field order matches the SSZ layout of
/// the beacon chain `AttestationData` container, so the signed bytes are the
/// same as its fixed-size encoding.
#[derive(Debug, PartialEq, Eq, Clone, Encode, Decode)]
pub struct AttestationData {
    pub slot: u64,
    pub index: u64,

    /// LMD GHOST vote
    pub beacon_block_root: B256,

    /// FFG vote
    pub source_epoch: u64,
    pub source_root: B256,
    pub target_epoch: u64,
    pub target_root: B256,
}

impl AttestationData {
    /// Canonical message bytes that get signed: little-endian integers and
    /// verbatim roots, in declaration order.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(SIGNING_MESSAGE_LENGTH);
        self.ssz_append(&mut buf);
        buf
    }
}

#[allow(clippy::too_many_arguments)]
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use alloy_primitives::hex::{self};
    use snap::raw::Decoder;
    use ssz::Decode;

    use super::*;

    fn sample() -> AttestationData {
        AttestationData {
            slot: 1,
            index: 2,
            beacon_block_root: B256::repeat_byte(0xaa),
            source_epoch: 3,
            source_root: B256::repeat_byte(0xbb),
            target_epoch: 4,
            target_root: B256::repeat_byte(0xcc),
        }
    }

    #[rstest::rstest]
    #[case(
        "0x8001F07F3351308C8BCCA938524B4D2187DEA63A985CE9B573F521304FBCCEA645EE0A0D82CFF40EA5308A1934AE5DF17E577E24901E03B210E53C36E0381E22F6A62AE082E1A61FD0616D1CB6DB5962AEA8FE8DC73579D758A6E46794C9BAEC44AE6DA34FA4A6DEEB2D334B7673976749A2D32240D507DC070D1D00F6F98E6F38442370",
        4083019436912562483,
        4226309972294454098,
        "0x985ce9b573f521304fbccea645ee0a0d82cff40ea5308a1934ae5df17e577e24",
        3908250436519534224,
        "0xe0381e22f6a62ae082e1a61fd0616d1cb6db5962aea8fe8dc73579d758a6e467",
        11776260211696388500,
        "0x4fa4a6deeb2d334b7673976749a2d32240d507dc070d1d00f6f98e6f38442370"
    )]
    #[case(
        "0x8001F07F32A717B4BAC8423ACEBF4CAEC262C6D2115B3E71CFC3F34AEC017109260AE3F5AD380E40282E19E95CD87F60327A918F637C4219790273674E458DA0119164A9DC986851C1809B8CAD5D5A25B999378AAB65460550681D93EDD8A8E626EA8698C295CDB6A83F715A624A771B17478B8EA7A2D1719AD6A294D329854A277AF7AB",
        4198138506873644850,
        15187935381641019342,
        "0x115b3e71cfc3f34aec017109260ae3f5ad380e40282e19e95cd87f60327a918f",
        7454304527366388835,
        "0x4e458da0119164a9dc986851c1809b8cad5d5a25b999378aab65460550681d93",
        10990729393443756269,
        "0xc295cdb6a83f715a624a771b17478b8ea7a2d1719ad6a294d329854a277af7ab"
    )]
    fn test_serialize_matches_consensus_encoding(
        #[case] snappy_ssz: &str,
        #[case] slot: u64,
        #[case] index: u64,
        #[case] beacon_block_root: &str,
        #[case] source_epoch: u64,
        #[case] source_root: &str,
        #[case] target_epoch: u64,
        #[case] target_root: &str,
    ) {
        let attestation_data = AttestationData {
            slot,
            index,
            beacon_block_root: B256::from_str(beacon_block_root).unwrap(),
            source_epoch,
            source_root: B256::from_str(source_root).unwrap(),
            target_epoch,
            target_root: B256::from_str(target_root).unwrap(),
        };

        let mut decoder = Decoder::new();
        let snappy_ssz = hex::decode(snappy_ssz).unwrap();
        let ssz = decoder.decompress_vec(&snappy_ssz).unwrap();

        assert_eq!(ssz, attestation_data.serialize());
        assert_eq!(
            attestation_data,
            AttestationData::from_ssz_bytes(&ssz).unwrap()
        );
    }

    #[test]
    fn test_serialize_layout() {
        let bytes = sample().serialize();

        assert_eq!(bytes.len(), SIGNING_MESSAGE_LENGTH);
        assert_eq!(&bytes[0..8], &1u64.to_le_bytes());
        assert_eq!(&bytes[8..16], &2u64.to_le_bytes());
        assert_eq!(&bytes[16..48], &[0xaa; 32]);
        assert_eq!(&bytes[48..56], &3u64.to_le_bytes());
        assert_eq!(&bytes[56..88], &[0xbb; 32]);
        assert_eq!(&bytes[88..96], &4u64.to_le_bytes());
        assert_eq!(&bytes[96..128], &[0xcc; 32]);
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let data = sample();
        assert_eq!(data.serialize(), data.serialize());
        assert_eq!(data.serialize(), data.clone().serialize());
    }
}
