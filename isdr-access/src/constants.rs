// isdr-access/src/constants.rs
//! Fixed protocol constants used across the crate

/// GlobalPlatform proprietary class byte used for STORE DATA
pub const STORE_DATA_CLA: u8 = 0x80;

/// STORE DATA instruction (GP Card Specification 11.11)
pub const STORE_DATA_INS: u8 = 0xE2;

/// STORE DATA P1: more blocks follow (case 4 also covers case 3)
pub const STORE_DATA_P1_MORE: u8 = 0x11;

/// STORE DATA P1: last block of the chain
pub const STORE_DATA_P1_LAST: u8 = 0x91;

/// ISO 7816-4 interindustry class byte for GET RESPONSE
pub const GET_RESPONSE_CLA: u8 = 0x00;
/// GET RESPONSE instruction
pub const GET_RESPONSE_INS: u8 = 0xC0;
/// GET RESPONSE P1, always zero
pub const GET_RESPONSE_P1: u8 = 0x00;
/// GET RESPONSE P2, always zero
pub const GET_RESPONSE_P2: u8 = 0x00;

/// Largest number of bytes a single GET RESPONSE may request (Le = 00)
pub const GET_RESPONSE_MAX_LEN: u16 = 0x100;

/// Block cap for chained writes. Short APDUs only, even when the
/// transport could carry extended lengths.
pub const DATA_BLOCK_MAX: u8 = 0xFF;

/// P2 carries the block sequence number, so a chain holds at most 256 blocks
pub const MAX_CHAIN_BLOCKS: usize = 0x100;

/// Length of a status word in hex characters
pub const SW_HEX_LEN: usize = 2 * 2;

/// SW1 announcing that response bytes are still available
pub const SW1_MORE_DATA: u8 = 0x61;

/// Sentinel status returned when no card status is available
pub const SW_INTERNAL_EXCEPTION: &str = "6F00";

/// ISD-R application identifier (GSMA SGP.02 clause 2.2.3)
pub const AID_ISD_R: &str = "A0000005591010FFFFFFFF8900000100";

/// Physical slot hosting the eUICC on common handsets
pub const DEFAULT_PHYSICAL_SLOT: i32 = 1;

/// Default bound on chained GET RESPONSE reads for one exchange
pub const DEFAULT_MAX_CONTINUATIONS: usize = 256;
