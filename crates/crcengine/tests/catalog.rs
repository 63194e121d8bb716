//! Every catalogued algorithm against its published check value, on every engine.

use crcengine::{CHECK_INPUT, Calculate, CrcParams, Engine, EngineForce, EngineKind, catalog};

fn engines(params: CrcParams) -> Vec<Engine> {
  vec![
    Engine::with_force(params, EngineForce::Auto).unwrap(),
    Engine::with_force(params, EngineForce::Bitwise).unwrap(),
    Engine::generic(params).unwrap(),
    Engine::generic_lsb(params).unwrap(),
    Engine::windowed(params).unwrap(),
  ]
}

#[test]
fn check_values_on_all_engines() {
  for params in catalog::ALGORITHMS {
    let expected = params.check.expect("catalogued algorithms carry a check value");
    for engine in engines(*params) {
      assert_eq!(
        engine.calculate(CHECK_INPUT),
        expected,
        "{} via {}: got {:#x}",
        params.name,
        engine.kind(),
        engine.calculate(CHECK_INPUT)
      );
      assert_eq!(engine.verify(), Ok(()));
    }
  }
}

#[test]
fn windowed_check_over_full_range() {
  for params in catalog::ALGORITHMS {
    let engine = Engine::windowed(*params).unwrap();
    let windowed = engine.as_windowed().unwrap();
    assert_eq!(
      windowed.calculate_range(CHECK_INPUT, 0, None, None),
      Ok(params.check.unwrap()),
      "{}",
      params.name
    );
  }
}

#[test]
fn default_selection_is_table_driven() {
  for params in catalog::ALGORITHMS {
    let engine = Engine::with_force(*params, EngineForce::Auto).unwrap();
    let expected = if params.reflect_in {
      EngineKind::LsbTable
    } else {
      EngineKind::MsbTable
    };
    assert_eq!(engine.kind(), expected, "{}", params.name);
  }
}

#[test]
fn lookup_by_name_and_alias() {
  for name in catalog::names() {
    let engine = Engine::by_name(name).unwrap();
    assert_eq!(engine.params().name, name);
  }
  let ccitt = Engine::by_name("CRC-16/CCITT-FALSE").unwrap();
  assert_eq!(ccitt.check(), 0x29B1);
}

#[test]
fn well_known_values() {
  let crc32 = Engine::by_name("crc-32").unwrap();
  assert_eq!(crc32.calculate(b"The quick brown fox jumps over the lazy dog"), 0x414F_A339);
  assert_eq!(crc32.calculate(b""), 0);

  let crc32c = Engine::new(catalog::CRC_32C).unwrap();
  assert_eq!(crc32c.calculate(&[0u8; 32]), 0x8A91_36AA);
  assert_eq!(crc32c.calculate(&[0xFFu8; 32]), 0x62A8_AB43);
}
