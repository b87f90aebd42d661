use soroban_sdk::{contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    AssetToken(AssetKind),
    Campaign,
    Escrowed(AssetKind),
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Donation(CampaignRound, Address),
}

pub type CampaignRound = u32;
pub type LedgerSeq = u32;

// The two asset kinds a campaign accepts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AssetKind {
    Primary,   // native asset (XLM)
    Secondary, // wrapped asset, enabled per campaign
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignPhase {
    Open,
    Expired,
    Withdrawn,
    Cancelled,
}

/// The campaign currently tracked by the ledger.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub round: CampaignRound,
    pub goal: u64,                 // USD-equivalent at initialization
    pub start: LedgerSeq,
    pub end: LedgerSeq,
    pub total_primary: i128,       // gross, never reduced by refunds
    pub total_secondary: i128,
    pub donation_count: u32,
    pub secondary_enabled: bool,
    pub is_withdrawn: bool,
    pub is_cancelled: bool,
}

/// Cumulative amounts a donor has given in one campaign round.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Donation {
    pub donor: Address,
    pub primary_amount: i128,
    pub secondary_amount: i128,
}

impl Donation {
    pub fn empty(donor: Address) -> Self {
        Donation {
            donor,
            primary_amount: 0,
            secondary_amount: 0,
        }
    }

    pub fn amount(&self, asset: AssetKind) -> i128 {
        match asset {
            AssetKind::Primary => self.primary_amount,
            AssetKind::Secondary => self.secondary_amount,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary_amount == 0 && self.secondary_amount == 0
    }
}

/// Read projection of the campaign for dashboards.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignInfo {
    pub round: CampaignRound,
    pub start: LedgerSeq,
    pub end: LedgerSeq,
    pub goal: u64,
    pub total_primary: i128,
    pub total_secondary: i128,
    pub donation_count: u32,
    pub secondary_enabled: bool,
    pub is_expired: bool,
    pub is_withdrawn: bool,
    pub is_cancelled: bool,
}

// Constants
// 4320 blocks is ~30 days at 10-minute blocks. Measured in Stellar ledgers
// (~5s each) the window is about 6 hours.
pub const CAMPAIGN_DURATION: u32 = 4320;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
