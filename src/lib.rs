#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod rules;
pub mod token_oracle_proxy;
pub mod types;

use errors::*;
use rules::{Opener, PERCENT};
use token_oracle_proxy::TokenOracleProxy;
use types::{ProjectConfig, ProjectStatus, QuorumBase, Tap, Voting, VotingOutcome, VotingType};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Daico {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Creates the project together with the ReleaseTap voting of tap 0.
    #[init]
    fn init(
        &self,
        funding_token: TokenIdentifier,
        project_token: TokenIdentifier,
        project_owner: ManagedAddress,
        return_address: ManagedAddress,
        investors_count: u64,
        tap_amounts: ManagedVec<BigUint>,
        tap_deadlines: ManagedVec<u64>,
        min_quorum_rate: u64,
        min_vote_rate: u64,
        quorum_base: QuorumBase,
        token_oracle: OptionalValue<ManagedAddress>,
    ) {
        require!(funding_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(project_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(!project_owner.is_zero(), ERR_INVALID_ADDRESS);
        require!(!return_address.is_zero(), ERR_INVALID_ADDRESS);
        require!(investors_count > 0, ERR_INVALID_AMOUNT);
        require!(
            min_quorum_rate > 0 && min_quorum_rate <= PERCENT,
            ERR_QUORUM_RATE_INVALID
        );
        require!(
            min_vote_rate > 0 && min_vote_rate <= PERCENT,
            ERR_APPROVAL_RATE_INVALID
        );
        self.require_valid_schedule(&tap_amounts, &tap_deadlines);

        match token_oracle.into_option() {
            Some(oracle) => {
                require!(!oracle.is_zero(), ERR_INVALID_ADDRESS);
                self.token_oracle().set(oracle);
            }
            None => {
                require!(quorum_base != QuorumBase::Oracle, ERR_ORACLE_NOT_CONFIGURED);
            }
        }

        self.funding_token().set(funding_token);
        self.project_token().set(project_token);
        self.project_owner().set(project_owner);
        self.return_address().set(return_address);
        self.investors_count().set(investors_count);
        self.min_quorum_rate().set(min_quorum_rate);
        self.min_vote_rate().set(min_vote_rate);
        self.quorum_base().set(quorum_base);

        let mut taps = self.taps();
        for i in 0..tap_amounts.len() {
            taps.push(&Tap {
                amount: tap_amounts.get(i).clone_value(),
                deadline: tap_deadlines.get(i),
                withdrawn: false,
            });
        }

        self.current_tap().set(0u64);
        self.voting_count().set(0u64);
        self.total_invested().set(BigUint::zero());
        self.total_withdrawn().set(BigUint::zero());
        self.project_terminated().set(false);
        self.remaining_funds_withdrawn().set(false);

        self.schedule_release_tap(0);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: invest
    // Funding token only, capped at the sum of all taps.
    // ========================================================

    #[endpoint(invest)]
    #[payable("*")]
    fn invest(&self) {
        self.require_not_terminated();

        let payment = self.call_value().single_esdt();
        let token_id = payment.token_identifier.clone();
        let amount = payment.amount.clone();
        require!(token_id == self.funding_token().get(), ERR_INVALID_TOKEN);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let total_invested = self.total_invested().get() + &amount;
        require!(
            total_invested <= self.funding_goal(),
            ERR_FUNDING_CAP_EXCEEDED
        );

        let caller = self.blockchain().get_caller();
        self.investments(&caller).update(|invested| *invested += &amount);
        self.investors().insert(caller.clone());
        self.total_invested().set(&total_invested);

        self.invest_event(&caller, &amount, &total_invested);
    }

    // ========================================================
    // ENDPOINT: castVote
    // One project-token holder, one vote. A TerminateProject
    // voting terminates the project as soon as its tally
    // accepts; it keeps taking votes until its window closes.
    // ========================================================

    #[endpoint(castVote)]
    #[payable("*")]
    fn cast_vote(&self, voting_id: u64, support: bool) {
        let mut voting = self.require_voting(voting_id);
        let now = self.blockchain().get_block_timestamp();
        let performs_termination = voting.voting_type.is_terminate_project()
            && voting.is_open(now)
            && voting_id == self.last_voting().id;
        if !performs_termination {
            self.require_not_terminated();
        }

        let caller = self.require_project_token_holder();
        require!(voting.is_open(now), ERR_OUTSIDE_VOTING_WINDOW);
        require!(
            !self.has_voted(voting_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        if support {
            voting.yes_count += 1;
        } else {
            voting.no_count += 1;
        }
        self.votings(voting_id).set(&voting);
        self.has_voted(voting_id, &caller).set(true);

        self.vote_event(voting_id, &caller, support);

        if performs_termination {
            self.settle(voting_id);
        }
    }

    // ========================================================
    // ENDPOINT: createVotingByOwner
    // Decreased-quorum retry of a ReleaseTap voting.
    // ========================================================

    #[endpoint(createVotingByOwner)]
    fn create_voting_by_owner(&self, voting_type: VotingType) -> u64 {
        self.require_project_owner();
        self.require_not_terminated();
        require!(
            rules::opener(voting_type) == Opener::ProjectOwner,
            ERR_ILLEGAL_VOTING_TRANSITION
        );

        self.open_requested_voting(voting_type)
    }

    // ========================================================
    // ENDPOINT: createVotingByInvestor
    // Escalation to roadmap change or termination.
    // ========================================================

    #[endpoint(createVotingByInvestor)]
    #[payable("*")]
    fn create_voting_by_investor(&self, voting_type: VotingType) -> u64 {
        self.require_not_terminated();
        self.require_project_token_holder();
        require!(
            rules::opener(voting_type) == Opener::Investor,
            ERR_ILLEGAL_VOTING_TRANSITION
        );

        self.open_requested_voting(voting_type)
    }

    // ========================================================
    // ENDPOINT: proposeRoadmap
    // The owner attaches the replacement roadmap to a pending
    // ChangeRoadmap voting, before its window opens. Investors
    // vote on exactly this proposal; without one the voting
    // cannot accept.
    // ========================================================

    #[endpoint(proposeRoadmap)]
    fn propose_roadmap(&self, tap_amounts: ManagedVec<BigUint>, tap_deadlines: ManagedVec<u64>) {
        self.require_project_owner();
        self.require_not_terminated();

        let voting = self.last_voting();
        require!(
            voting.voting_type.is_change_roadmap()
                && self.blockchain().get_block_timestamp() < voting.created_at,
            ERR_ROADMAP_PROPOSAL_CLOSED
        );
        self.require_valid_roadmap(&tap_amounts, &tap_deadlines);

        let mut proposal = self.proposed_taps(voting.id);
        proposal.clear();
        for i in 0..tap_amounts.len() {
            proposal.push(&Tap {
                amount: tap_amounts.get(i).clone_value(),
                deadline: tap_deadlines.get(i),
                withdrawn: false,
            });
        }

        let total_amount = self.sum_amounts(&tap_amounts);
        self.roadmap_proposed_event(voting.id, tap_amounts.len() as u64, &total_amount);
    }

    // ========================================================
    // ENDPOINT: finalizeVoting
    // Anyone, once the window has closed. Caches the outcome
    // and applies an accepted termination or roadmap change.
    // ========================================================

    #[endpoint(finalizeVoting)]
    fn finalize_voting(&self, voting_id: u64) -> VotingOutcome {
        self.require_voting(voting_id);
        self.finalize(voting_id)
    }

    // ========================================================
    // ENDPOINT: withdrawTapFunds
    // ========================================================

    #[endpoint(withdrawTapFunds)]
    fn withdraw_tap_funds(&self, tap_index: u64) {
        self.require_project_owner();
        self.require_not_terminated();

        let mut tap = self.require_tap(tap_index);
        require!(!tap.withdrawn, ERR_ALREADY_WITHDRAWN);

        let accepted = match self.last_tap_voting(tap_index) {
            Some(voting) => {
                voting.voting_type.is_release_tap()
                    && self.settle(voting.id) == VotingOutcome::Accept
            }
            None => false,
        };
        require!(accepted, ERR_NOT_ACCEPTED);

        let total_withdrawn = self.total_withdrawn().get() + &tap.amount;
        require!(
            total_withdrawn <= self.total_invested().get(),
            ERR_INSUFFICIENT_FUNDS
        );

        tap.withdrawn = true;
        self.taps().set(tap_index as usize + 1, &tap);
        self.total_withdrawn().set(&total_withdrawn);

        let next_tap = tap_index + 1;
        self.current_tap().set(next_tap);
        if (next_tap as usize) < self.taps().len() {
            self.schedule_release_tap(next_tap);
        }

        let project_owner = self.project_owner().get();
        self.send()
            .direct_esdt(&project_owner, &self.funding_token().get(), 0, &tap.amount);
        self.tap_withdrawn_event(tap_index, &project_owner, &tap.amount);
    }

    // ========================================================
    // ENDPOINT: withdrawRemainingFunds
    // After termination: the whole escrow goes to the return
    // address, once.
    // ========================================================

    #[endpoint(withdrawRemainingFunds)]
    fn withdraw_remaining_funds(&self) {
        require!(self.is_terminated(), ERR_PROJECT_NOT_TERMINATED);
        require!(
            !self.remaining_funds_withdrawn().get(),
            ERR_ALREADY_WITHDRAWN
        );

        self.finalize(self.last_voting().id);
        self.remaining_funds_withdrawn().set(true);

        let funding_token = self.funding_token().get();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(funding_token.clone()), 0);
        let return_address = self.return_address().get();
        if balance > 0u64 {
            self.send()
                .direct_esdt(&return_address, &funding_token, 0, &balance);
        }

        self.remaining_funds_withdrawn_event(&return_address, &balance);
    }

    // ========================================================
    // INTERNAL: voting lifecycle
    // ========================================================

    /// Checks the escalation table against the last voting, which must be
    /// closed, then opens the requested voting on the current tap.
    fn open_requested_voting(&self, voting_type: VotingType) -> u64 {
        let last = self.last_voting();
        let now = self.blockchain().get_block_timestamp();
        require!(last.is_closed(now), ERR_ILLEGAL_VOTING_TRANSITION);

        let last_outcome = self.finalize(last.id);
        require!(
            rules::can_open_voting(last.voting_type, last_outcome, voting_type),
            ERR_ILLEGAL_VOTING_TRANSITION
        );

        let (created_at, finish_at) = rules::requested_voting_window(voting_type, now);
        self.create_voting(self.current_tap().get(), voting_type, created_at, finish_at)
    }

    fn schedule_release_tap(&self, tap_index: u64) -> u64 {
        let tap = self.taps().get(tap_index as usize + 1);
        let (created_at, finish_at) =
            rules::release_tap_window(self.blockchain().get_block_timestamp(), tap.deadline);
        self.create_voting(tap_index, VotingType::ReleaseTap, created_at, finish_at)
    }

    fn create_voting(
        &self,
        tap_index: u64,
        voting_type: VotingType,
        created_at: u64,
        finish_at: u64,
    ) -> u64 {
        let voting_id = self.voting_count().get();
        let voting = Voting {
            id: voting_id,
            tap_index,
            voting_type,
            quorum_rate: rules::quorum_rate_for(voting_type, self.min_quorum_rate().get()),
            yes_count: 0,
            no_count: 0,
            created_at,
            finish_at,
            outcome: None,
        };

        self.votings(voting_id).set(&voting);
        self.voting_count().set(voting_id + 1);
        self.tap_votings(tap_index).push(&voting_id);

        self.voting_created_event(voting_id, tap_index, voting_type, created_at, finish_at);
        voting_id
    }

    /// Outcome of a closed voting, computed and cached on first call.
    fn finalize(&self, voting_id: u64) -> VotingOutcome {
        let voting = self.votings(voting_id).get();
        if let Some(outcome) = voting.outcome {
            return outcome;
        }
        require!(
            voting.is_closed(self.blockchain().get_block_timestamp()),
            ERR_VOTING_NOT_FINISHED
        );

        let outcome = self.compute_outcome(&voting);
        self.record_outcome(voting, outcome);
        outcome
    }

    /// Outcome that counts right now. A closed voting is finalized. An open
    /// one is decided early once its tally accepts, otherwise left running.
    fn settle(&self, voting_id: u64) -> VotingOutcome {
        let voting = self.votings(voting_id).get();
        if let Some(outcome) = voting.outcome {
            return outcome;
        }
        if voting.is_closed(self.blockchain().get_block_timestamp()) {
            return self.finalize(voting_id);
        }

        let outcome = self.compute_outcome(&voting);
        if outcome == VotingOutcome::Accept {
            self.record_outcome(voting, outcome);
        }
        outcome
    }

    fn record_outcome(&self, mut voting: Voting, outcome: VotingOutcome) {
        voting.outcome = Some(outcome);
        self.votings(voting.id).set(&voting);
        self.voting_finalized_event(
            voting.id,
            voting.voting_type,
            outcome,
            voting.yes_count,
            voting.no_count,
        );

        if outcome == VotingOutcome::Accept {
            if voting.voting_type.is_terminate_project() {
                self.latch_termination(voting.id);
            } else if voting.voting_type.is_change_roadmap() {
                self.apply_roadmap(voting.id);
            }
        }
    }

    /// A roadmap voting with nothing proposed cannot accept; a winning yes
    /// side counts as Decline.
    fn compute_outcome(&self, voting: &Voting) -> VotingOutcome {
        if let Some(outcome) = voting.outcome {
            return outcome;
        }
        let outcome = rules::voting_outcome(
            voting.yes_count,
            voting.no_count,
            self.quorum_denominator(),
            voting.quorum_rate,
            self.min_vote_rate().get(),
        );
        if outcome == VotingOutcome::Accept
            && voting.voting_type.is_change_roadmap()
            && self.proposed_taps(voting.id).is_empty()
        {
            return VotingOutcome::Decline;
        }
        outcome
    }

    fn latch_termination(&self, voting_id: u64) {
        if self.project_terminated().get() {
            return;
        }
        self.project_terminated().set(true);
        self.project_terminated_event(voting_id);
    }

    /// Withdrawn taps keep their record; everything after them comes from
    /// the accepted proposal.
    fn apply_roadmap(&self, voting_id: u64) {
        let current_tap = self.current_tap().get();
        let proposal = self.proposed_taps(voting_id);

        let mut taps = self.taps();
        taps.clear();
        for (i, proposed) in proposal.iter().enumerate() {
            taps.push(&Tap {
                amount: proposed.amount,
                deadline: proposed.deadline,
                withdrawn: (i as u64) < current_tap,
            });
        }

        self.roadmap_changed_event(voting_id, taps.len() as u64, &self.funding_goal());
        self.schedule_release_tap(current_tap);
    }

    // ========================================================
    // INTERNAL: validation
    // ========================================================

    fn require_valid_schedule(&self, amounts: &ManagedVec<BigUint>, deadlines: &ManagedVec<u64>) {
        require!(
            amounts.len() == deadlines.len(),
            ERR_SCHEDULE_LENGTH_MISMATCH
        );
        require!(!amounts.is_empty(), ERR_EMPTY_ROADMAP);

        let mut previous_deadline = 0u64;
        for i in 0..amounts.len() {
            let amount = amounts.get(i);
            require!(*amount > 0u64, ERR_INVALID_AMOUNT);

            let deadline = deadlines.get(i);
            require!(i == 0 || deadline > previous_deadline, ERR_INVALID_DEADLINE);
            previous_deadline = deadline;
        }
    }

    /// A replacement must keep every withdrawn tap and must not shrink the
    /// total funding.
    fn require_valid_roadmap(&self, amounts: &ManagedVec<BigUint>, deadlines: &ManagedVec<u64>) {
        self.require_valid_schedule(amounts, deadlines);

        let finalized = self.current_tap().get() as usize;
        require!(amounts.len() > finalized, ERR_SCHEDULE_LENGTH_MISMATCH);

        for i in 0..finalized {
            let tap = self.taps().get(i + 1);
            let amount = amounts.get(i).clone_value();
            require!(
                amount == tap.amount && deadlines.get(i) == tap.deadline,
                ERR_FINALIZED_TAP_MODIFIED
            );
        }

        require!(
            self.sum_amounts(amounts) >= self.funding_goal(),
            ERR_ROADMAP_NOT_MONOTONIC
        );
    }

    fn require_project_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.project_owner().get(),
            ERR_NOT_PROJECT_OWNER
        );
    }

    fn require_not_terminated(&self) {
        require!(!self.is_terminated(), ERR_PROJECT_TERMINATED);
    }

    fn require_tap(&self, tap_index: u64) -> Tap<Self::Api> {
        require!(
            tap_index < self.taps().len() as u64,
            ERR_TAP_NOT_FOUND
        );
        self.taps().get(tap_index as usize + 1)
    }

    fn require_voting(&self, voting_id: u64) -> Voting {
        require!(
            voting_id < self.voting_count().get(),
            ERR_VOTING_NOT_FOUND
        );
        self.votings(voting_id).get()
    }

    // ========================================================
    // INTERNAL: state helpers
    // ========================================================

    /// True once termination was latched, or once the last voting is a
    /// closed TerminateProject voting whose tally accepts. Nothing can follow
    /// such a voting, so it stays the last one.
    fn is_terminated(&self) -> bool {
        if self.project_terminated().get() {
            return true;
        }
        let last = self.last_voting();
        last.voting_type.is_terminate_project()
            && last.is_closed(self.blockchain().get_block_timestamp())
            && self.compute_outcome(&last) == VotingOutcome::Accept
    }

    fn last_voting(&self) -> Voting {
        self.votings(self.voting_count().get() - 1).get()
    }

    fn last_tap_voting(&self, tap_index: u64) -> Option<Voting> {
        let voting_ids = self.tap_votings(tap_index);
        if voting_ids.is_empty() {
            return None;
        }
        Some(self.votings(voting_ids.get(voting_ids.len())).get())
    }

    /// The caller, proven to hold project tokens. With a token oracle its
    /// `balanceOf` decides. Without one the caller attaches project tokens,
    /// which are sent straight back.
    fn require_project_token_holder(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(*self.call_value().egld_value() == 0u64, ERR_INVALID_TOKEN);
        let payments = self.call_value().all_esdt_transfers();

        if !self.token_oracle().is_empty() {
            require!(payments.is_empty(), ERR_INVALID_TOKEN);
            let balance: BigUint = self
                .tx()
                .to(self.token_oracle().get())
                .typed(TokenOracleProxy)
                .balance_of(caller.clone())
                .returns(ReturnsResult)
                .sync_call_readonly();
            require!(balance > 0u64, ERR_NOT_AN_INVESTOR);
            return caller;
        }

        require!(payments.len() == 1, ERR_NOT_AN_INVESTOR);
        let payment = payments.get(0);
        let token_id = payment.token_identifier.clone();
        let nonce = payment.token_nonce;
        let amount = payment.amount.clone();
        require!(
            token_id == self.project_token().get() && amount > 0u64,
            ERR_NOT_AN_INVESTOR
        );

        self.send().direct_esdt(&caller, &token_id, nonce, &amount);
        caller
    }

    fn quorum_denominator(&self) -> u64 {
        match self.quorum_base().get() {
            QuorumBase::Configured => self.investors_count().get(),
            QuorumBase::Oracle => self
                .tx()
                .to(self.token_oracle().get())
                .typed(TokenOracleProxy)
                .total_configured_holders()
                .returns(ReturnsResult)
                .sync_call_readonly(),
        }
    }

    fn funding_goal(&self) -> BigUint {
        let mut total = BigUint::zero();
        for tap in self.taps().iter() {
            total += &tap.amount;
        }
        total
    }

    fn sum_amounts(&self, amounts: &ManagedVec<BigUint>) -> BigUint {
        let mut total = BigUint::zero();
        for amount in amounts.iter() {
            total += &*amount;
        }
        total
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProjectConfig)]
    fn get_project_config(&self) -> ProjectConfig<Self::Api> {
        ProjectConfig {
            funding_token: self.funding_token().get(),
            project_token: self.project_token().get(),
            project_owner: self.project_owner().get(),
            return_address: self.return_address().get(),
            investors_count: self.investors_count().get(),
            min_quorum_rate: self.min_quorum_rate().get(),
            min_vote_rate: self.min_vote_rate().get(),
            quorum_base: self.quorum_base().get(),
            token_oracle: if self.token_oracle().is_empty() {
                None
            } else {
                Some(self.token_oracle().get())
            },
        }
    }

    #[view(getProjectStatus)]
    fn get_project_status(&self) -> ProjectStatus {
        if self.is_terminated() {
            ProjectStatus::Terminated
        } else if self.current_tap().get() >= self.taps().len() as u64 {
            ProjectStatus::Completed
        } else {
            ProjectStatus::Active
        }
    }

    #[view(isProjectTerminated)]
    fn is_project_terminated(&self) -> bool {
        self.is_terminated()
    }

    #[view(getTap)]
    fn get_tap(&self, tap_index: u64) -> Tap<Self::Api> {
        self.require_tap(tap_index)
    }

    #[view(getTaps)]
    fn get_taps(&self) -> MultiValueEncoded<Tap<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for tap in self.taps().iter() {
            result.push(tap);
        }
        result
    }

    #[view(getTapsCount)]
    fn get_taps_count(&self) -> u64 {
        self.taps().len() as u64
    }

    #[view(getCurrentTap)]
    fn get_current_tap(&self) -> u64 {
        self.current_tap().get()
    }

    /// Whether the tap's governing voting accepts the release, open or not.
    #[view(isTapWithdrawAcceptedByInvestors)]
    fn is_tap_withdraw_accepted_by_investors(&self, tap_index: u64) -> bool {
        self.require_tap(tap_index);
        match self.last_tap_voting(tap_index) {
            Some(voting) => {
                voting.voting_type.is_release_tap()
                    && self.compute_outcome(&voting) == VotingOutcome::Accept
            }
            None => false,
        }
    }

    #[view(getVoting)]
    fn get_voting(&self, voting_id: u64) -> Voting {
        self.require_voting(voting_id)
    }

    #[view(getVotingsCount)]
    fn get_votings_count(&self) -> u64 {
        self.voting_count().get()
    }

    #[view(getTapVotings)]
    fn get_tap_votings(&self, tap_index: u64) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for voting_id in self.tap_votings(tap_index).iter() {
            result.push(voting_id);
        }
        result
    }

    /// Current outcome of a voting. Live tally while open, cached once
    /// finalized.
    #[view(resolve)]
    fn resolve(&self, voting_id: u64) -> VotingOutcome {
        let voting = self.require_voting(voting_id);
        self.compute_outcome(&voting)
    }

    #[view(isInvestorVoted)]
    fn is_investor_voted(&self, voting_id: u64, investor: ManagedAddress) -> bool {
        require!(!investor.is_zero(), ERR_INVALID_ADDRESS);
        self.has_voted(voting_id, &investor).get()
    }

    #[view(getProposedRoadmap)]
    fn get_proposed_roadmap(&self, voting_id: u64) -> MultiValueEncoded<Tap<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for tap in self.proposed_taps(voting_id).iter() {
            result.push(tap);
        }
        result
    }

    #[view(getInvestment)]
    fn get_investment(&self, investor: ManagedAddress) -> BigUint {
        self.investments(&investor).get()
    }

    /// (funding goal, total invested, total withdrawn, investors)
    #[view(getFundingStats)]
    fn get_funding_stats(&self) -> MultiValue4<BigUint, BigUint, BigUint, u64> {
        (
            self.funding_goal(),
            self.total_invested().get(),
            self.total_withdrawn().get(),
            self.investors().len() as u64,
        )
            .into()
    }

    /// Part of the contributions earmarked for a tap, filling taps in
    /// roadmap order.
    #[view(getTapReservedAmount)]
    fn get_tap_reserved_amount(&self, tap_index: u64) -> BigUint {
        let tap = self.require_tap(tap_index);

        let mut preceding = BigUint::zero();
        for i in 0..tap_index as usize {
            preceding += &self.taps().get(i + 1).amount;
        }

        let invested = self.total_invested().get();
        if invested <= preceding {
            return BigUint::zero();
        }
        let available = invested - preceding;
        if available < tap.amount {
            available
        } else {
            tap.amount
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("invest")]
    fn invest_event(
        &self,
        #[indexed] investor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_invested: &BigUint,
    );

    #[event("votingCreated")]
    fn voting_created_event(
        &self,
        #[indexed] voting_id: u64,
        #[indexed] tap_index: u64,
        #[indexed] voting_type: VotingType,
        #[indexed] created_at: u64,
        finish_at: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] voting_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
    );

    #[event("votingFinalized")]
    fn voting_finalized_event(
        &self,
        #[indexed] voting_id: u64,
        #[indexed] voting_type: VotingType,
        #[indexed] outcome: VotingOutcome,
        #[indexed] yes_count: u64,
        no_count: u64,
    );

    #[event("roadmapProposed")]
    fn roadmap_proposed_event(
        &self,
        #[indexed] voting_id: u64,
        #[indexed] taps_count: u64,
        total_amount: &BigUint,
    );

    #[event("roadmapChanged")]
    fn roadmap_changed_event(
        &self,
        #[indexed] voting_id: u64,
        #[indexed] taps_count: u64,
        total_amount: &BigUint,
    );

    #[event("tapWithdrawn")]
    fn tap_withdrawn_event(
        &self,
        #[indexed] tap_index: u64,
        #[indexed] receiver: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("projectTerminated")]
    fn project_terminated_event(&self, #[indexed] voting_id: u64);

    #[event("remainingFundsWithdrawn")]
    fn remaining_funds_withdrawn_event(
        &self,
        #[indexed] receiver: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("fundingToken")]
    fn funding_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("projectToken")]
    fn project_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("projectOwner")]
    fn project_owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("returnAddress")]
    fn return_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("investorsCount")]
    fn investors_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("minQuorumRate")]
    fn min_quorum_rate(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("minVoteRate")]
    fn min_vote_rate(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("quorumBase")]
    fn quorum_base(&self) -> SingleValueMapper<QuorumBase>;

    #[storage_mapper("tokenOracle")]
    fn token_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Roadmap ──

    #[storage_mapper("taps")]
    fn taps(&self) -> VecMapper<Tap<Self::Api>>;

    #[storage_mapper("currentTap")]
    fn current_tap(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposedTaps")]
    fn proposed_taps(&self, voting_id: u64) -> VecMapper<Tap<Self::Api>>;

    // ── Votings ──

    #[storage_mapper("votingCount")]
    fn voting_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votings")]
    fn votings(&self, voting_id: u64) -> SingleValueMapper<Voting>;

    #[storage_mapper("tapVotings")]
    fn tap_votings(&self, tap_index: u64) -> VecMapper<u64>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, voting_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Escrow ──

    #[storage_mapper("totalInvested")]
    fn total_invested(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalWithdrawn")]
    fn total_withdrawn(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("investments")]
    fn investments(&self, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("investors")]
    fn investors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("projectTerminated")]
    fn project_terminated(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("remainingFundsWithdrawn")]
    fn remaining_funds_withdrawn(&self) -> SingleValueMapper<bool>;
}
