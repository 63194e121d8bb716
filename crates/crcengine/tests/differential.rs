//! Cross-validation against crc-fast-rust for the algorithms it ships.

use crc_fast::CrcAlgorithm;
use crcengine::{Calculate, CrcParams, Engine, EngineForce, catalog};
use proptest::prelude::*;

const PAIRS: &[(CrcParams, CrcAlgorithm)] = &[
  (catalog::CRC_32, CrcAlgorithm::Crc32IsoHdlc),
  (catalog::CRC_32C, CrcAlgorithm::Crc32Iscsi),
  (catalog::CRC_32_BZIP2, CrcAlgorithm::Crc32Bzip2),
  (catalog::CRC_32_MPEG2, CrcAlgorithm::Crc32Mpeg2),
  (catalog::CRC_64_XZ, CrcAlgorithm::Crc64Xz),
  (catalog::CRC_64_NVME, CrcAlgorithm::Crc64Nvme),
  (catalog::CRC_64, CrcAlgorithm::Crc64Ecma182),
];

fn check(data: &[u8]) -> Result<(), TestCaseError> {
  for (params, algorithm) in PAIRS {
    let reference = crc_fast::checksum(algorithm.clone(), data);
    for force in [EngineForce::Table, EngineForce::Bitwise] {
      let ours = Engine::with_force(*params, force).unwrap().calculate(data);
      prop_assert_eq!(
        ours,
        reference,
        "{} ({}) mismatch: ours={:#x}, reference={:#x}, len={}",
        params.name,
        force.as_str(),
        ours,
        reference,
        data.len()
      );
    }
  }
  Ok(())
}

#[test]
fn check_input_matches_crc_fast() {
  check(b"123456789").unwrap();
  check(b"").unwrap();
}

proptest! {
  #[test]
  fn matches_crc_fast(data in prop::collection::vec(any::<u8>(), 0..=4096)) {
    check(&data)?;
  }

  #[test]
  fn seeded_resume_matches_crc_fast_digest(
    data in prop::collection::vec(any::<u8>(), 0..=1024),
    chunk in 1usize..=257,
  ) {
    // Non-reflected, zero xor_out: the finished value is the register state.
    let engine = Engine::new(catalog::CRC_32_MPEG2).unwrap();
    let mut crc = catalog::CRC_32_MPEG2.seed;
    for part in data.chunks(chunk) {
      crc = engine.calculate_seeded(part, crc);
    }
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32Mpeg2);
    reference.update(&data);
    prop_assert_eq!(crc, reference.finalize());
  }
}
