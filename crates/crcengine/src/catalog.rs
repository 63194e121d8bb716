//! Named CRC algorithms.
//!
//! Parameter sets and check values follow the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Names are
//! matched case-insensitively and `_` is accepted in place of `-`, so
//! `"CRC_32"` finds [`CRC_32`].
//!
//! | Constant | Width | Polynomial | Reflected | Check |
//! |----------|-------|------------|-----------|-------|
//! | [`CRC_8`] | 8 | 0x07 | no | 0xF4 |
//! | [`CRC_16_KERMIT`] | 16 | 0x1021 | yes | 0x2189 |
//! | [`CRC_24_OPENPGP`] | 24 | 0x864CFB | no | 0x21CF02 |
//! | [`CRC_32`] | 32 | 0x04C11DB7 | yes | 0xCBF43926 |
//! | [`CRC_32C`] | 32 | 0x1EDC6F41 | yes | 0xE3069283 |
//! | [`CRC_64_XZ`] | 64 | 0x42F0E1EBA9EA3693 | yes | 0x995DC9BBDF1939FA |
//!
//! See [`ALGORITHMS`] for the full list.

use crate::CrcParams;

const fn normal(name: &'static str, width: u8, polynomial: u64, seed: u64, xor_out: u64, check: u64) -> CrcParams {
  CrcParams::new(width, polynomial)
    .with_name(name)
    .with_seed(seed)
    .with_xor_out(xor_out)
    .with_check(check)
}

const fn reflected(name: &'static str, width: u8, polynomial: u64, seed: u64, xor_out: u64, check: u64) -> CrcParams {
  normal(name, width, polynomial, seed, xor_out, check).with_reflect(true, true)
}

// ─────────────────────────────────────────────────────────────────────────────
// Sub-byte widths
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_3_GSM: CrcParams = normal("crc-3/gsm", 3, 0x3, 0x0, 0x7, 0x4);
pub const CRC_3_ROHC: CrcParams = reflected("crc-3/rohc", 3, 0x3, 0x7, 0x0, 0x6);
pub const CRC_4_G704: CrcParams = reflected("crc-4/g-704", 4, 0x3, 0x0, 0x0, 0x7);
pub const CRC_5_USB: CrcParams = reflected("crc-5/usb", 5, 0x05, 0x1F, 0x1F, 0x19);
pub const CRC_5_EPC: CrcParams = normal("crc-5/epc-c1g2", 5, 0x09, 0x09, 0x00, 0x00);
pub const CRC_6_CDMA2000_A: CrcParams = normal("crc-6/cdma2000-a", 6, 0x27, 0x3F, 0x00, 0x0D);
pub const CRC_7_MMC: CrcParams = normal("crc-7/mmc", 7, 0x09, 0x00, 0x00, 0x75);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-8
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_8: CrcParams = normal("crc-8", 8, 0x07, 0x00, 0x00, 0xF4);
pub const CRC_8_MAXIM: CrcParams = reflected("crc-8/maxim-dow", 8, 0x31, 0x00, 0x00, 0xA1);
pub const CRC_8_WCDMA: CrcParams = reflected("crc-8/wcdma", 8, 0x9B, 0x00, 0x00, 0x25);
pub const CRC_8_AUTOSAR: CrcParams = normal("crc-8/autosar", 8, 0x2F, 0xFF, 0xFF, 0xDF);
pub const CRC_8_SAE_J1850: CrcParams = normal("crc-8/sae-j1850", 8, 0x1D, 0xFF, 0xFF, 0x4B);
pub const CRC_8_DARC: CrcParams = reflected("crc-8/darc", 8, 0x39, 0x00, 0x00, 0x15);
pub const CRC_8_CDMA2000: CrcParams = normal("crc-8/cdma2000", 8, 0x9B, 0xFF, 0x00, 0xDA);

// ─────────────────────────────────────────────────────────────────────────────
// Odd widths 10..=15
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_10_ATM: CrcParams = normal("crc-10/atm", 10, 0x233, 0x000, 0x000, 0x199);
pub const CRC_11_FLEXRAY: CrcParams = normal("crc-11/flexray", 11, 0x385, 0x01A, 0x000, 0x5A3);
pub const CRC_12_DECT: CrcParams = normal("crc-12/dect", 12, 0x80F, 0x000, 0x000, 0xF5B);
/// Input is not reflected but the output is.
pub const CRC_12_UMTS: CrcParams = normal("crc-12/umts", 12, 0x80F, 0x000, 0x000, 0xDAF).with_reflect(false, true);
pub const CRC_15_CAN: CrcParams = normal("crc-15/can", 15, 0x4599, 0x0000, 0x0000, 0x059E);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_16_ARC: CrcParams = reflected("crc-16/arc", 16, 0x8005, 0x0000, 0x0000, 0xBB3D);
pub const CRC_16_IBM_3740: CrcParams = normal("crc-16/ibm-3740", 16, 0x1021, 0xFFFF, 0x0000, 0x29B1);
pub const CRC_16_KERMIT: CrcParams = reflected("crc-16/kermit", 16, 0x1021, 0x0000, 0x0000, 0x2189);
pub const CRC_16_XMODEM: CrcParams = normal("crc-16/xmodem", 16, 0x1021, 0x0000, 0x0000, 0x31C3);
pub const CRC_16_MODBUS: CrcParams = reflected("crc-16/modbus", 16, 0x8005, 0xFFFF, 0x0000, 0x4B37);
pub const CRC_16_X25: CrcParams = reflected("crc-16/x-25", 16, 0x1021, 0xFFFF, 0xFFFF, 0x906E);
pub const CRC_16_USB: CrcParams = reflected("crc-16/usb", 16, 0x8005, 0xFFFF, 0xFFFF, 0xB4C8);
pub const CRC_16_UMTS: CrcParams = normal("crc-16/umts", 16, 0x8005, 0x0000, 0x0000, 0xFEE8);
pub const CRC_16_DNP: CrcParams = reflected("crc-16/dnp", 16, 0x3D65, 0x0000, 0xFFFF, 0xEA82);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-21 .. CRC-31
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_21_CAN_FD: CrcParams = normal("crc-21/can-fd", 21, 0x10_2899, 0x00_0000, 0x00_0000, 0x0E_D841);
pub const CRC_24_OPENPGP: CrcParams = normal("crc-24/openpgp", 24, 0x86_4CFB, 0xB7_04CE, 0x00_0000, 0x21_CF02);
pub const CRC_24_BLE: CrcParams = reflected("crc-24/ble", 24, 0x00_065B, 0x55_5555, 0x00_0000, 0xC2_5A56);
pub const CRC_31_PHILIPS: CrcParams =
  normal("crc-31/philips", 31, 0x04C1_1DB7, 0x7FFF_FFFF, 0x7FFF_FFFF, 0x0CE9_E46C);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/ISO-HDLC: Ethernet, gzip, zip, PNG.
pub const CRC_32: CrcParams = reflected("crc-32", 32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xCBF4_3926);
/// CRC-32/ISCSI (Castagnoli): iSCSI, SCTP, ext4, Btrfs.
pub const CRC_32C: CrcParams = reflected("crc-32c", 32, 0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xE306_9283);
pub const CRC_32_BZIP2: CrcParams = normal("crc-32/bzip2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFC89_1918);
pub const CRC_32_MPEG2: CrcParams = normal("crc-32/mpeg-2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, 0x0376_E6E7);
pub const CRC_32_CKSUM: CrcParams = normal("crc-32/cksum", 32, 0x04C1_1DB7, 0x0000_0000, 0xFFFF_FFFF, 0x765E_7680);
pub const CRC_32_JAMCRC: CrcParams = reflected("crc-32/jamcrc", 32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, 0x340B_C6D9);
pub const CRC_32Q: CrcParams = normal("crc-32/aixm", 32, 0x8141_41AB, 0x0000_0000, 0x0000_0000, 0x3010_BF7F);
pub const CRC_32_XFER: CrcParams = normal("crc-32/xfer", 32, 0x0000_00AF, 0x0000_0000, 0x0000_0000, 0xBD0B_E338);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-40 / CRC-64
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_40_GSM: CrcParams = normal("crc-40/gsm", 40, 0x00_0482_0009, 0x00_0000_0000, 0xFF_FFFF_FFFF, 0xD4_164F_C646);
/// CRC-64/ECMA-182.
pub const CRC_64: CrcParams = normal("crc-64", 64, 0x42F0_E1EB_A9EA_3693, 0, 0, 0x6C40_DF5F_0B49_7347);
pub const CRC_64_WE: CrcParams = normal("crc-64/we", 64, 0x42F0_E1EB_A9EA_3693, !0, !0, 0x62EC_59E3_F1A4_F00A);
pub const CRC_64_XZ: CrcParams = reflected("crc-64/xz", 64, 0x42F0_E1EB_A9EA_3693, !0, !0, 0x995D_C9BB_DF19_39FA);
pub const CRC_64_GO_ISO: CrcParams = reflected("crc-64/go-iso", 64, 0x0000_0000_0000_001B, !0, !0, 0xB909_56C7_75A4_1001);
pub const CRC_64_NVME: CrcParams = reflected("crc-64/nvme", 64, 0xAD93_D235_94C9_3659, !0, !0, 0xAE8B_1486_0A79_9888);

/// Every catalogued algorithm.
pub const ALGORITHMS: &[CrcParams] = &[
  CRC_3_GSM,
  CRC_3_ROHC,
  CRC_4_G704,
  CRC_5_USB,
  CRC_5_EPC,
  CRC_6_CDMA2000_A,
  CRC_7_MMC,
  CRC_8,
  CRC_8_MAXIM,
  CRC_8_WCDMA,
  CRC_8_AUTOSAR,
  CRC_8_SAE_J1850,
  CRC_8_DARC,
  CRC_8_CDMA2000,
  CRC_10_ATM,
  CRC_11_FLEXRAY,
  CRC_12_DECT,
  CRC_12_UMTS,
  CRC_15_CAN,
  CRC_16_ARC,
  CRC_16_IBM_3740,
  CRC_16_KERMIT,
  CRC_16_XMODEM,
  CRC_16_MODBUS,
  CRC_16_X25,
  CRC_16_USB,
  CRC_16_UMTS,
  CRC_16_DNP,
  CRC_21_CAN_FD,
  CRC_24_OPENPGP,
  CRC_24_BLE,
  CRC_31_PHILIPS,
  CRC_32,
  CRC_32C,
  CRC_32_BZIP2,
  CRC_32_MPEG2,
  CRC_32_CKSUM,
  CRC_32_JAMCRC,
  CRC_32Q,
  CRC_32_XFER,
  CRC_40_GSM,
  CRC_64,
  CRC_64_WE,
  CRC_64_XZ,
  CRC_64_GO_ISO,
  CRC_64_NVME,
];

/// Alternative names, mapped to the canonical name in [`ALGORITHMS`].
const ALIASES: &[(&str, &str)] = &[
  ("crc-3", "crc-3/gsm"),
  ("crc-5", "crc-5/usb"),
  ("crc-8/maxim", "crc-8/maxim-dow"),
  ("crc-16", "crc-16/arc"),
  ("crc-16/ccitt-false", "crc-16/ibm-3740"),
  ("crc-16/ccitt", "crc-16/kermit"),
  ("crc-16/buypass", "crc-16/umts"),
  ("crc-24", "crc-24/openpgp"),
  ("crc-32/iso-hdlc", "crc-32"),
  ("crc-32/iscsi", "crc-32c"),
  ("crc-32/posix", "crc-32/cksum"),
  ("crc-32q", "crc-32/aixm"),
  ("crc-64/ecma-182", "crc-64"),
];

/// Compare algorithm names ignoring ASCII case and treating `_` as `-`.
fn names_match(a: &str, b: &str) -> bool {
  let fold = |c: u8| if c == b'_' { b'-' } else { c.to_ascii_lowercase() };
  a.len() == b.len() && a.bytes().zip(b.bytes()).all(|(x, y)| fold(x) == fold(y))
}

/// Look up a catalogued algorithm by name or alias.
///
/// ```
/// use crcengine::catalog;
///
/// let params = catalog::lookup("CRC-32/ISCSI").unwrap();
/// assert_eq!(params.name, "crc-32c");
/// assert!(catalog::lookup("crc-99").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CrcParams> {
  let canonical = ALIASES
    .iter()
    .find(|(alias, _)| names_match(alias, name))
    .map_or(name, |&(_, canonical)| canonical);
  ALGORITHMS.iter().find(|p| names_match(p.name, canonical))
}

/// Names of every catalogued algorithm, in catalogue order.
pub fn names() -> impl Iterator<Item = &'static str> {
  ALGORITHMS.iter().map(|p| p.name)
}
