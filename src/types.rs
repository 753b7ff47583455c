multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Voting Type
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VotingType {
    /// Release the current tap to the project owner.
    ReleaseTap,
    /// Owner's retry of a ReleaseTap voting that missed quorum.
    ReleaseTapDecreasedQuorum,
    /// Replace the remaining roadmap with the owner's proposal.
    ChangeRoadmap,
    ChangeRoadmapDecreasedQuorum,
    /// Stop the project and refund the escrow to the return address.
    TerminateProject,
    TerminateProjectDecreasedQuorum,
}

impl VotingType {
    pub fn is_release_tap(&self) -> bool {
        matches!(self, VotingType::ReleaseTap | VotingType::ReleaseTapDecreasedQuorum)
    }

    pub fn is_change_roadmap(&self) -> bool {
        matches!(
            self,
            VotingType::ChangeRoadmap | VotingType::ChangeRoadmapDecreasedQuorum
        )
    }

    pub fn is_terminate_project(&self) -> bool {
        matches!(
            self,
            VotingType::TerminateProject | VotingType::TerminateProjectDecreasedQuorum
        )
    }

    pub fn is_decreased_quorum(&self) -> bool {
        matches!(
            self,
            VotingType::ReleaseTapDecreasedQuorum
                | VotingType::ChangeRoadmapDecreasedQuorum
                | VotingType::TerminateProjectDecreasedQuorum
        )
    }
}

// ============================================================
// Voting Outcome
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VotingOutcome {
    Accept,
    Decline,
    /// Too few investors took part.
    QuorumNotReached,
    /// Quorum reached, but neither side crossed the approval rate.
    NoDecision,
}

// ============================================================
// Quorum Base: source of the quorum denominator
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuorumBase {
    /// Fixed investor count given at deployment.
    Configured,
    /// Holder count reported by the token oracle when the voting resolves.
    Oracle,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectStatus {
    Active,
    /// A termination voting was accepted. Only the refund remains.
    Terminated,
    /// Every tap has been withdrawn.
    Completed,
}

// ============================================================
// Tap: one tranche of the roadmap
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Tap<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    /// Block timestamp at which the tap's ReleaseTap voting closes.
    pub deadline: u64,
    pub withdrawn: bool,
}

// ============================================================
// Voting
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Voting {
    pub id: u64,
    pub tap_index: u64,
    pub voting_type: VotingType,
    /// Participation percentage this voting needs to be decisive.
    pub quorum_rate: u64,
    pub yes_count: u64,
    pub no_count: u64,
    /// Voting window is [created_at, finish_at).
    pub created_at: u64,
    pub finish_at: u64,
    /// Set once the window has closed and the outcome was finalized.
    pub outcome: Option<VotingOutcome>,
}

impl Voting {
    pub fn is_open(&self, now: u64) -> bool {
        now >= self.created_at && now < self.finish_at
    }

    pub fn is_closed(&self, now: u64) -> bool {
        now >= self.finish_at
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProjectConfig<M: ManagedTypeApi> {
    pub funding_token: TokenIdentifier<M>,
    pub project_token: TokenIdentifier<M>,
    pub project_owner: ManagedAddress<M>,
    pub return_address: ManagedAddress<M>,
    pub investors_count: u64,
    pub min_quorum_rate: u64,
    pub min_vote_rate: u64,
    pub quorum_base: QuorumBase,
    pub token_oracle: Option<ManagedAddress<M>>,
}
