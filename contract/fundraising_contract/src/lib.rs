#![no_std]


mod campaign;
mod errors;
mod events;
mod storage;
mod storage_types;
mod vault;

pub use errors::FundraisingError;
pub use storage_types::{
    AssetKind, Campaign, CampaignInfo, CampaignPhase, Donation, CAMPAIGN_DURATION,
};

use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct FundraisingContract;

#[contractimpl]
impl FundraisingContract {
    /// Bind the campaign owner and the two accepted token contracts. The owner
    /// is fixed for the lifetime of the deployment.
    pub fn __constructor(e: Env, owner: Address, primary_token: Address, secondary_token: Address) {
        storage::write_config(&e, &owner, &primary_token, &secondary_token);
    }

    /// Start a campaign at the current ledger. A previous campaign must be
    /// withdrawn, or cancelled with every donor refunded.
    pub fn initialize(
        e: Env,
        caller: Address,
        goal: u64,
        secondary_flag: u32,
    ) -> Result<(), FundraisingError> {
        caller.require_auth();
        campaign::require_owner(&e, &caller)?;

        let previous = storage::read_campaign(&e);
        let campaign = campaign::open(&e, previous.as_ref(), goal, secondary_flag != 0)?;
        storage::write_campaign(&e, &campaign);

        log!(&e, "campaign initialized", campaign.round, campaign.start, campaign.end);
        events::emit_campaign_initialized(
            &e,
            events::CampaignInitializedEvent {
                round: campaign.round,
                owner: caller,
                goal,
                start: campaign.start,
                end: campaign.end,
                secondary_enabled: campaign.secondary_enabled,
            },
        );
        Ok(())
    }

    pub fn contribute(
        e: Env,
        donor: Address,
        asset: AssetKind,
        amount: i128,
    ) -> Result<(), FundraisingError> {
        donor.require_auth();

        let mut campaign = storage::load_campaign(&e)?;
        campaign::ensure_accepting(&e, &campaign, asset, amount)?;

        let mut donation = storage::read_donation(&e, campaign.round, &donor);
        campaign::credit(&mut campaign, &mut donation, asset, amount)?;

        vault::deposit(&e, &donor, asset, amount)?;
        storage::write_donation(&e, campaign.round, &donation);
        storage::write_campaign(&e, &campaign);

        events::emit_donation_received(
            &e,
            events::DonationReceivedEvent {
                round: campaign.round,
                donor,
                asset,
                amount,
                donation_count: campaign.donation_count,
            },
        );
        Ok(())
    }

    pub fn donate_primary(e: Env, donor: Address, amount: i128) -> Result<(), FundraisingError> {
        Self::contribute(e, donor, AssetKind::Primary, amount)
    }

    pub fn donate_secondary(e: Env, donor: Address, amount: i128) -> Result<(), FundraisingError> {
        Self::contribute(e, donor, AssetKind::Secondary, amount)
    }

    /// Pay out everything held in custody to the owner. Allowed once the
    /// window has closed, whether or not the goal was reached.
    pub fn withdraw(e: Env, caller: Address) -> Result<(), FundraisingError> {
        caller.require_auth();
        campaign::require_owner(&e, &caller)?;

        let mut campaign = storage::load_campaign(&e)?;
        campaign::ensure_withdrawable(&e, &campaign)?;

        campaign.is_withdrawn = true;
        storage::write_campaign(&e, &campaign);

        let primary_amount = vault::release_all(&e, &caller, AssetKind::Primary)?;
        let secondary_amount = vault::release_all(&e, &caller, AssetKind::Secondary)?;

        log!(&e, "campaign withdrawn", campaign.round, primary_amount, secondary_amount);
        events::emit_campaign_withdrawn(
            &e,
            events::CampaignWithdrawnEvent {
                round: campaign.round,
                owner: caller,
                primary_amount,
                secondary_amount,
            },
        );
        Ok(())
    }

    /// Cancel the campaign so donors can reclaim their funds with `refund`.
    pub fn cancel_campaign(e: Env, caller: Address) -> Result<(), FundraisingError> {
        caller.require_auth();
        campaign::require_owner(&e, &caller)?;

        let mut campaign = storage::load_campaign(&e)?;
        campaign::ensure_cancellable(&campaign)?;

        campaign.is_cancelled = true;
        storage::write_campaign(&e, &campaign);

        log!(&e, "campaign cancelled", campaign.round);
        events::emit_campaign_cancelled(
            &e,
            events::CampaignCancelledEvent {
                round: campaign.round,
                cancelled_at: campaign::current_ledger(&e),
            },
        );
        Ok(())
    }

    /// Return the caller's contributions after a cancellation. Calling again,
    /// or without having donated, succeeds and moves nothing.
    pub fn refund(e: Env, donor: Address) -> Result<(), FundraisingError> {
        donor.require_auth();

        let campaign = storage::load_campaign(&e)?;
        campaign::ensure_refundable(&campaign)?;

        let donation = storage::read_donation(&e, campaign.round, &donor);
        if donation.is_empty() {
            return Ok(());
        }

        storage::write_donation(&e, campaign.round, &Donation::empty(donor.clone()));
        vault::release(&e, &donor, AssetKind::Primary, donation.primary_amount)?;
        vault::release(&e, &donor, AssetKind::Secondary, donation.secondary_amount)?;

        events::emit_donation_refunded(
            &e,
            events::DonationRefundedEvent {
                round: campaign.round,
                donor,
                primary_amount: donation.primary_amount,
                secondary_amount: donation.secondary_amount,
            },
        );
        Ok(())
    }

    /// View functions
    pub fn get_campaign_info(e: Env) -> Option<CampaignInfo> {
        storage::read_campaign(&e).map(|c| campaign::info(&e, &c))
    }

    pub fn get_phase(e: Env) -> Option<CampaignPhase> {
        storage::read_campaign(&e).map(|c| campaign::phase(&e, &c))
    }

    pub fn get_donation(e: Env, donor: Address, asset: AssetKind) -> i128 {
        Self::get_donor(e, donor).amount(asset)
    }

    pub fn get_donor(e: Env, donor: Address) -> Donation {
        match storage::read_campaign(&e) {
            Some(c) => storage::read_donation(&e, c.round, &donor),
            None => Donation::empty(donor),
        }
    }

    pub fn get_owner(e: Env) -> Address {
        storage::read_owner(&e)
    }

    pub fn get_asset_token(e: Env, asset: AssetKind) -> Address {
        storage::read_asset_token(&e, asset)
    }

    pub fn get_escrow_balance(e: Env, asset: AssetKind) -> i128 {
        vault::escrowed(&e, asset)
    }
}
