extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use crate::{Calculate, CrcParams, Engine, EngineForce, reverse_bits, width_mask};

/// Arbitrary valid parameter set, any width and reflection combination.
fn arb_params() -> impl Strategy<Value = CrcParams> {
  (1u8..=64, any::<u64>(), any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>()).prop_map(
    |(width, poly, seed, xor_out, reflect_in, reflect_out)| {
      let mask = width_mask(width);
      CrcParams::new(width, poly & mask)
        .with_seed(seed & mask)
        .with_xor_out(xor_out & mask)
        .with_reflect(reflect_in, reflect_out)
    },
  )
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..=256)
}

fn all_engines(params: CrcParams) -> [Engine; 4] {
  [
    Engine::with_force(params, EngineForce::Table).unwrap(),
    Engine::generic(params).unwrap(),
    Engine::generic_lsb(params).unwrap(),
    Engine::windowed(params).unwrap(),
  ]
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn all_engines_agree(params in arb_params(), data in arb_data()) {
    let [table, generic, rest @ ..] = all_engines(params);
    let expected = generic.calculate(&data);
    prop_assert_eq!(table.calculate(&data), expected, "{}", table.kind());
    for engine in &rest {
      prop_assert_eq!(engine.calculate(&data), expected, "{}", engine.kind());
    }
  }

  #[test]
  fn result_fits_width(params in arb_params(), data in arb_data()) {
    for engine in all_engines(params) {
      prop_assert_eq!(engine.calculate(&data) & !params.mask(), 0);
    }
  }

  #[test]
  fn empty_input_is_finalized_seed(params in arb_params()) {
    let seed = if params.reflect_out { reverse_bits(params.seed, params.width) } else { params.seed };
    for engine in all_engines(params) {
      prop_assert_eq!(engine.calculate(&[]), seed ^ params.xor_out, "{}", engine.kind());
    }
  }

  #[test]
  fn seed_override_matches_reseeded_params(params in arb_params(), seed in any::<u64>(), data in arb_data()) {
    let reseeded = params.with_seed(seed & params.mask());
    let expected = Engine::generic(reseeded).unwrap().calculate(&data);
    for engine in all_engines(params) {
      prop_assert_eq!(engine.calculate_seeded(&data, seed), expected, "{}", engine.kind());
    }
  }

  /// With zero seed and zero xor, CRC(a ^ b) = CRC(a) ^ CRC(b) for equal lengths.
  #[test]
  fn linear_over_xor(
    width in 1u8..=64,
    poly in any::<u64>(),
    reflect in any::<(bool, bool)>(),
    pair in (1usize..=128).prop_flat_map(|n| (prop::collection::vec(any::<u8>(), n), prop::collection::vec(any::<u8>(), n))),
  ) {
    let params = CrcParams::new(width, poly & width_mask(width)).with_reflect(reflect.0, reflect.1);
    let (a, b) = pair;
    let mixed: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x ^ y).collect();
    for engine in all_engines(params) {
      prop_assert_eq!(engine.calculate(&mixed), engine.calculate(&a) ^ engine.calculate(&b));
    }
  }
}
