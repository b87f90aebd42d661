use soroban_sdk::contracterror;

/// Error codes surfaced to callers. The numeric values are part of the
/// contract interface and must not be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundraisingError {
    NotAuthorized = 100,
    CampaignEnded = 101,
    InvalidAmount = 102,
    NotCancelled = 103,
    CampaignNotEnded = 104,
    CampaignCancelled = 105,
    AlreadyWithdrawn = 106,
    AlreadyCancelled = 107,
    AlreadyInitialized = 108,
    AssetUnsupported = 109,
    NotInitialized = 110,
    ArithmeticOverflow = 111,
    InsufficientEscrow = 112,
}
