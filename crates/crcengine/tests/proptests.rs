//! Property tests for table generation and bit reversal.

use crcengine::{
  BitOrder, generate_table, lsb_table, lsb_table_bitwise, msb_table, msb_table_bitwise, reverse_bits, width_mask,
};
use proptest::prelude::*;

fn arb_poly() -> impl Strategy<Value = (u8, u64)> {
  (1u8..=64, any::<u64>()).prop_map(|(width, poly)| (width, poly & width_mask(width)))
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn doubling_tables_match_bitwise((width, poly) in arb_poly()) {
    prop_assert_eq!(msb_table(poly, width), msb_table_bitwise(poly, width));
    prop_assert_eq!(lsb_table(poly, width), lsb_table_bitwise(poly, width));
  }

  #[test]
  fn tables_are_linear((width, poly) in arb_poly(), i in any::<u8>(), j in any::<u8>()) {
    for order in [BitOrder::Msb, BitOrder::Lsb] {
      let table = generate_table(poly, width, order).unwrap();
      prop_assert_eq!(table.get(i ^ j), table.get(i) ^ table.get(j));
      prop_assert_eq!(table.get(0), 0);
      prop_assert!(table.entries().iter().all(|&e| e & !width_mask(width) == 0));
    }
  }

  #[test]
  fn reverse_bits_is_an_involution(value in any::<u64>(), width in 1u8..=64) {
    let value = value & width_mask(width);
    let reversed = reverse_bits(value, width);
    prop_assert_eq!(reversed & !width_mask(width), 0);
    prop_assert_eq!(reverse_bits(reversed, width), value);
  }

  #[test]
  fn reverse_bits_matches_core(value in any::<u64>(), width in 1u8..=64) {
    let value = value & width_mask(width);
    prop_assert_eq!(reverse_bits(value, width), value.reverse_bits() >> (64 - u32::from(width)));
  }
}
