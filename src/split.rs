multiversx_sc::imports!();

use crate::types::PotSplit;

/// `payout_percent` is expressed against this denominator.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// The house only ever matches half of a wager; the odd unit stays in the reserve.
pub fn house_stake<M: ManagedTypeApi>(wager: &BigUint<M>) -> BigUint<M> {
    wager.clone() / 2u64
}

/// A wager can be matched while it does not exceed the reserve as it stood
/// before the call.
pub fn is_matchable<M: ManagedTypeApi>(wager: &BigUint<M>, capacity: &BigUint<M>) -> bool {
    wager <= capacity
}

/// Splits `pot` into `(primary, secondary)`, where
/// `primary = floor(pot * payout_percent / 100)` and `secondary` is the rest.
pub fn split_pot<M: ManagedTypeApi>(
    pot: &BigUint<M>,
    payout_percent: u64,
) -> (BigUint<M>, BigUint<M>) {
    let primary = (pot * payout_percent) / PERCENT_DENOMINATOR;
    let secondary = pot - &primary;
    (primary, secondary)
}

/// Matched branch: pot is the wager plus the house stake; the bettor takes
/// the primary share and the master takes the rest.
pub fn matched_split<M: ManagedTypeApi>(wager: &BigUint<M>, payout_percent: u64) -> PotSplit<M> {
    let house_stake = house_stake(wager);
    let pot = wager + &house_stake;
    let (primary_share, secondary_share) = split_pot(&pot, payout_percent);
    PotSplit {
        matched: true,
        pot,
        house_stake,
        primary_share,
        secondary_share,
    }
}

/// Unmatched branch: the wager alone is the pot; the master takes the
/// primary share and the owner takes the rest. Nothing leaves the reserve.
pub fn unmatched_split<M: ManagedTypeApi>(wager: &BigUint<M>, payout_percent: u64) -> PotSplit<M> {
    let (primary_share, secondary_share) = split_pot(wager, payout_percent);
    PotSplit {
        matched: false,
        pot: wager.clone(),
        house_stake: BigUint::zero(),
        primary_share,
        secondary_share,
    }
}

/// Picks the branch for `wager` against the current `capacity`.
pub fn resolve<M: ManagedTypeApi>(
    wager: &BigUint<M>,
    capacity: &BigUint<M>,
    payout_percent: u64,
) -> PotSplit<M> {
    if is_matchable(wager, capacity) {
        matched_split(wager, payout_percent)
    } else {
        unmatched_split(wager, payout_percent)
    }
}
