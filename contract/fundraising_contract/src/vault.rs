//! Custody of contributed assets.
//!
//! Tokens sit on the contract's own address. The vault also tracks how much of
//! each asset it holds on behalf of the campaign, so releases never touch
//! tokens that reached the contract outside of a contribution.

use soroban_sdk::{token, Address, Env};

use crate::errors::FundraisingError;
use crate::storage::{extend_instance, read_asset_token};
use crate::storage_types::{AssetKind, DataKey};

pub fn escrowed(e: &Env, asset: AssetKind) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::Escrowed(asset))
        .unwrap_or(0)
}

fn set_escrowed(e: &Env, asset: AssetKind, amount: i128) {
    e.storage().instance().set(&DataKey::Escrowed(asset), &amount);
    extend_instance(e);
}

pub fn is_empty(e: &Env) -> bool {
    escrowed(e, AssetKind::Primary) == 0 && escrowed(e, AssetKind::Secondary) == 0
}

/// Move `amount` of `asset` from `from` into custody.
pub fn deposit(e: &Env, from: &Address, asset: AssetKind, amount: i128) -> Result<(), FundraisingError> {
    let balance = escrowed(e, asset)
        .checked_add(amount)
        .ok_or(FundraisingError::ArithmeticOverflow)?;

    let token_client = token::Client::new(e, &read_asset_token(e, asset));
    token_client.transfer(from, &e.current_contract_address(), &amount);

    set_escrowed(e, asset, balance);
    Ok(())
}

/// Release `amount` of `asset` from custody to `to`. Zero is a no-op.
pub fn release(e: &Env, to: &Address, asset: AssetKind, amount: i128) -> Result<(), FundraisingError> {
    if amount == 0 {
        return Ok(());
    }

    let held = escrowed(e, asset);
    if amount < 0 || amount > held {
        return Err(FundraisingError::InsufficientEscrow);
    }

    let token_client = token::Client::new(e, &read_asset_token(e, asset));
    token_client.transfer(&e.current_contract_address(), to, &amount);

    set_escrowed(e, asset, held - amount);
    Ok(())
}

/// Release everything held for `asset` to `to` and return the amount moved.
pub fn release_all(e: &Env, to: &Address, asset: AssetKind) -> Result<i128, FundraisingError> {
    let held = escrowed(e, asset);
    release(e, to, asset, held)?;
    Ok(held)
}
