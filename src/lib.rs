#![no_std]

multiversx_sc::imports!();

pub mod activation;
pub mod bankroll;
pub mod errors;
pub mod events;
pub mod match_escrow_proxy;
pub mod roles;
pub mod rotation;
pub mod split;
pub mod types;

use errors::{
    ERR_INVALID_CAPITAL_REQUIREMENT, ERR_INVALID_PAYOUT_PERCENT, ERR_ONLY_MASTER_CAN_FUND,
    ERR_ZERO_FUNDING, ERR_ZERO_WAGER,
};
use split::PERCENT_DENOMINATOR;
use types::{EscrowStats, PotSplit};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MatchEscrow:
    activation::ActivationModule
    + bankroll::BankrollModule
    + roles::RolesModule
    + rotation::RotationModule
    + events::EventsModule
{
    // ========================================================
    // Init
    // The attached value seeds the reserve. Deployer becomes
    // both the permanent owner and the first master.
    // ========================================================

    #[init]
    #[payable("EGLD")]
    fn init(&self, activation_time: u64, payout_percent: u64, capital_requirement: BigUint) {
        require!(
            payout_percent <= PERCENT_DENOMINATOR,
            ERR_INVALID_PAYOUT_PERCENT
        );
        require!(capital_requirement > 0u64, ERR_INVALID_CAPITAL_REQUIREMENT);

        let caller = self.blockchain().get_caller();
        let initial_reserve = self.call_value().egld_value().clone_value();

        self.activation_time().set(activation_time);
        self.payout_percent().set(payout_percent);
        self.capital_requirement().set(&capital_requirement);
        self.owner().set(&caller);
        self.master().set(&caller);
        self.reserve().set(&initial_reserve);

        self.total_wagered().set(BigUint::zero());
        self.total_house_staked().set(BigUint::zero());
        self.matched_count().set(0u64);
        self.unmatched_count().set(0u64);

        if initial_reserve > 0u64 {
            self.reserve_funded_event(&caller, &initial_reserve);
        }
    }

    // ========================================================
    // ENDPOINT: wager
    // The attached value is the wager. `bettor` designates who
    // receives the winnings; defaults to the caller.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(wager)]
    fn wager(&self, bettor: OptionalValue<ManagedAddress>) {
        self.require_open();

        let wager = self.call_value().egld_value().clone_value();
        require!(wager > 0u64, ERR_ZERO_WAGER);
        let bettor = self.address_or_caller(bettor);

        // ── Resolve against the reserve as it stood before this call ──
        let outcome = split::resolve(&wager, &self.capacity(), self.payout_percent().get());

        // ── Ledger before transfers ──
        if outcome.matched {
            self.debit(&outcome.house_stake);
        }
        self.record_resolution(&wager, &outcome);

        let master = self.master().get();
        let (primary_recipient, secondary_recipient) = if outcome.matched {
            (bettor.clone(), master)
        } else {
            (master, self.owner().get())
        };

        self.match_resolved_event(
            &bettor,
            &wager,
            outcome.matched,
            &outcome.primary_share,
            &outcome.secondary_share,
        );

        self.pay_out(&primary_recipient, &outcome.primary_share);
        self.pay_out(&secondary_recipient, &outcome.secondary_share);
    }

    // ========================================================
    // ENDPOINT: fund
    // Master tops up the bankroll.
    // ========================================================

    /// Not behind the activation gate: seeding the reserve before opening is intended.
    #[payable("EGLD")]
    #[endpoint(fund)]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.master().get(), ERR_ONLY_MASTER_CAN_FUND);

        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_FUNDING);

        self.credit(&amount);
        self.reserve_funded_event(&caller, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn record_resolution(&self, wager: &BigUint, outcome: &PotSplit<Self::Api>) {
        self.total_wagered().update(|total| *total += wager);
        if outcome.matched {
            self.total_house_staked()
                .update(|total| *total += &outcome.house_stake);
            self.matched_count().update(|count| *count += 1);
        } else {
            self.unmatched_count().update(|count| *count += 1);
        }
    }

    fn pay_out(&self, recipient: &ManagedAddress, amount: &BigUint) {
        if *amount > 0u64 {
            self.send().direct_egld(recipient, amount);
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// What a wager of `wager` would resolve to against the current reserve.
    #[view(previewWager)]
    fn preview_wager(&self, wager: BigUint) -> PotSplit<Self::Api> {
        split::resolve(&wager, &self.capacity(), self.payout_percent().get())
    }

    #[view(getEscrowStats)]
    fn get_escrow_stats(&self) -> EscrowStats<Self::Api> {
        EscrowStats {
            total_wagered: self.total_wagered().get(),
            total_house_staked: self.total_house_staked().get(),
            matched_count: self.matched_count().get(),
            unmatched_count: self.unmatched_count().get(),
        }
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<u64, u64, BigUint> {
        (
            self.activation_time().get(),
            self.payout_percent().get(),
            self.capital_requirement().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getPayoutPercent)]
    #[storage_mapper("payoutPercent")]
    fn payout_percent(&self) -> SingleValueMapper<u64>;

    // ── Running totals ──

    #[storage_mapper("totalWagered")]
    fn total_wagered(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalHouseStaked")]
    fn total_house_staked(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("matchedCount")]
    fn matched_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("unmatchedCount")]
    fn unmatched_count(&self) -> SingleValueMapper<u64>;
}
