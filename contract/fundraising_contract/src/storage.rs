use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::FundraisingError;
use crate::storage_types::{
    AssetKind, Campaign, CampaignRound, DataKey, Donation, PersistentKey, TTL_INSTANCE,
    TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn write_config(e: &Env, owner: &Address, primary_token: &Address, secondary_token: &Address) {
    let instance = e.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::AssetToken(AssetKind::Primary), primary_token);
    instance.set(&DataKey::AssetToken(AssetKind::Secondary), secondary_token);
    extend_instance(e);
}

// Owner and token addresses are written by the constructor, so a miss here
// means the instance was never constructed.
pub fn read_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(e, FundraisingError::NotInitialized))
}

pub fn read_asset_token(e: &Env, asset: AssetKind) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::AssetToken(asset))
        .unwrap_or_else(|| panic_with_error!(e, FundraisingError::NotInitialized))
}

pub fn read_campaign(e: &Env) -> Option<Campaign> {
    e.storage().instance().get(&DataKey::Campaign)
}

pub fn load_campaign(e: &Env) -> Result<Campaign, FundraisingError> {
    read_campaign(e).ok_or(FundraisingError::NotInitialized)
}

pub fn write_campaign(e: &Env, campaign: &Campaign) {
    e.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance(e);
}

/// Absent records read as an empty donation.
pub fn read_donation(e: &Env, round: CampaignRound, donor: &Address) -> Donation {
    e.storage()
        .persistent()
        .get(&PersistentKey::Donation(round, donor.clone()))
        .unwrap_or_else(|| Donation::empty(donor.clone()))
}

pub fn write_donation(e: &Env, round: CampaignRound, donation: &Donation) {
    let key = PersistentKey::Donation(round, donation.donor.clone());
    e.storage().persistent().set(&key, donation);
    extend_persistent(e, &key);
}
