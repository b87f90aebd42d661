use soroban_sdk::{Address, Env};

use crate::errors::FundraisingError;
use crate::storage::read_owner;
use crate::storage_types::{
    AssetKind, Campaign, CampaignInfo, CampaignPhase, Donation, LedgerSeq, CAMPAIGN_DURATION,
};
use crate::vault;

pub fn current_ledger(e: &Env) -> LedgerSeq {
    e.ledger().sequence()
}

pub fn is_expired(e: &Env, campaign: &Campaign) -> bool {
    current_ledger(e) > campaign.end
}

pub fn phase(e: &Env, campaign: &Campaign) -> CampaignPhase {
    if campaign.is_cancelled {
        CampaignPhase::Cancelled
    } else if campaign.is_withdrawn {
        CampaignPhase::Withdrawn
    } else if is_expired(e, campaign) {
        CampaignPhase::Expired
    } else {
        CampaignPhase::Open
    }
}

/// A campaign can be replaced once its funds are fully settled: withdrawn by
/// the owner, or cancelled with every donor refunded.
pub fn is_terminal(e: &Env, campaign: &Campaign) -> bool {
    match phase(e, campaign) {
        CampaignPhase::Withdrawn => true,
        CampaignPhase::Cancelled => vault::is_empty(e),
        CampaignPhase::Open | CampaignPhase::Expired => false,
    }
}

pub fn require_owner(e: &Env, caller: &Address) -> Result<(), FundraisingError> {
    if *caller != read_owner(e) {
        return Err(FundraisingError::NotAuthorized);
    }
    Ok(())
}

pub fn open(
    e: &Env,
    previous: Option<&Campaign>,
    goal: u64,
    secondary_enabled: bool,
) -> Result<Campaign, FundraisingError> {
    let round = match previous {
        Some(prev) if !is_terminal(e, prev) => return Err(FundraisingError::AlreadyInitialized),
        Some(prev) => prev
            .round
            .checked_add(1)
            .ok_or(FundraisingError::ArithmeticOverflow)?,
        None => 1,
    };

    let start = current_ledger(e);
    let end = start
        .checked_add(CAMPAIGN_DURATION)
        .ok_or(FundraisingError::ArithmeticOverflow)?;

    Ok(Campaign {
        round,
        goal,
        start,
        end,
        total_primary: 0,
        total_secondary: 0,
        donation_count: 0,
        secondary_enabled,
        is_withdrawn: false,
        is_cancelled: false,
    })
}

pub fn ensure_accepting(
    e: &Env,
    campaign: &Campaign,
    asset: AssetKind,
    amount: i128,
) -> Result<(), FundraisingError> {
    if campaign.is_cancelled {
        return Err(FundraisingError::CampaignCancelled);
    }
    if is_expired(e, campaign) {
        return Err(FundraisingError::CampaignEnded);
    }
    if amount <= 0 {
        return Err(FundraisingError::InvalidAmount);
    }
    if asset == AssetKind::Secondary && !campaign.secondary_enabled {
        return Err(FundraisingError::AssetUnsupported);
    }
    Ok(())
}

pub fn ensure_withdrawable(e: &Env, campaign: &Campaign) -> Result<(), FundraisingError> {
    if !is_expired(e, campaign) {
        return Err(FundraisingError::CampaignNotEnded);
    }
    if campaign.is_cancelled {
        return Err(FundraisingError::CampaignCancelled);
    }
    if campaign.is_withdrawn {
        return Err(FundraisingError::AlreadyWithdrawn);
    }
    Ok(())
}

pub fn ensure_cancellable(campaign: &Campaign) -> Result<(), FundraisingError> {
    if campaign.is_cancelled {
        return Err(FundraisingError::AlreadyCancelled);
    }
    if campaign.is_withdrawn {
        return Err(FundraisingError::AlreadyWithdrawn);
    }
    Ok(())
}

pub fn ensure_refundable(campaign: &Campaign) -> Result<(), FundraisingError> {
    if !campaign.is_cancelled {
        return Err(FundraisingError::NotCancelled);
    }
    Ok(())
}

/// Add `amount` to both the donor's record and the campaign total.
pub fn credit(
    campaign: &mut Campaign,
    donation: &mut Donation,
    asset: AssetKind,
    amount: i128,
) -> Result<(), FundraisingError> {
    let (total, given) = match asset {
        AssetKind::Primary => (&mut campaign.total_primary, &mut donation.primary_amount),
        AssetKind::Secondary => (&mut campaign.total_secondary, &mut donation.secondary_amount),
    };
    *total = total
        .checked_add(amount)
        .ok_or(FundraisingError::ArithmeticOverflow)?;
    *given = given
        .checked_add(amount)
        .ok_or(FundraisingError::ArithmeticOverflow)?;
    campaign.donation_count = campaign
        .donation_count
        .checked_add(1)
        .ok_or(FundraisingError::ArithmeticOverflow)?;
    Ok(())
}

pub fn info(e: &Env, campaign: &Campaign) -> CampaignInfo {
    CampaignInfo {
        round: campaign.round,
        start: campaign.start,
        end: campaign.end,
        goal: campaign.goal,
        total_primary: campaign.total_primary,
        total_secondary: campaign.total_secondary,
        donation_count: campaign.donation_count,
        secondary_enabled: campaign.secondary_enabled,
        is_expired: is_expired(e, campaign),
        is_withdrawn: campaign.is_withdrawn,
        is_cancelled: campaign.is_cancelled,
    }
}
