use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{AssetKind, CampaignRound, LedgerSeq};

#[contracttype]
#[derive(Clone)]
pub struct CampaignInitializedEvent {
    pub round: CampaignRound,
    pub owner: Address,
    pub goal: u64,
    pub start: LedgerSeq,
    pub end: LedgerSeq,
    pub secondary_enabled: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationReceivedEvent {
    pub round: CampaignRound,
    pub donor: Address,
    pub asset: AssetKind,
    pub amount: i128,
    pub donation_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignWithdrawnEvent {
    pub round: CampaignRound,
    pub owner: Address,
    pub primary_amount: i128,
    pub secondary_amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignCancelledEvent {
    pub round: CampaignRound,
    pub cancelled_at: LedgerSeq,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationRefundedEvent {
    pub round: CampaignRound,
    pub donor: Address,
    pub primary_amount: i128,
    pub secondary_amount: i128,
}

pub fn emit_campaign_initialized(env: &Env, event: CampaignInitializedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_initialized"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events()
        .publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_campaign_withdrawn(env: &Env, event: CampaignWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_withdrawn"),), event);
}

pub fn emit_campaign_cancelled(env: &Env, event: CampaignCancelledEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_cancelled"),), event);
}

pub fn emit_donation_refunded(env: &Env, event: DonationRefundedEvent) {
    env.events()
        .publish((Symbol::new(env, "donation_refunded"),), event);
}
