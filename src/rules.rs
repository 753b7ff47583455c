//! Pure governance rules: outcome resolution, the escalation table and
//! voting window scheduling. Nothing here touches storage.

use crate::types::{VotingOutcome, VotingType};

pub const PERCENT: u64 = 100;

/// Participation bar of every decreased-quorum voting, capped at the
/// project's own minimum quorum rate.
pub const DECREASED_QUORUM_RATE: u64 = 50;

pub const DAY: u64 = 86_400;

/// ReleaseTap and every `*DecreasedQuorum` retry of it
pub const RELEASE_TAP_PERIOD: u64 = 7 * DAY;

/// ChangeRoadmap votings open only after the owner had time to propose.
pub const CHANGE_ROADMAP_DELAY: u64 = 21 * DAY;
pub const CHANGE_ROADMAP_PERIOD: u64 = 7 * DAY;
pub const CHANGE_ROADMAP_DECREASED_QUORUM_DELAY: u64 = 7 * DAY;
pub const CHANGE_ROADMAP_DECREASED_QUORUM_PERIOD: u64 = 7 * DAY;

pub const TERMINATE_PROJECT_PERIOD: u64 = 14 * DAY;
pub const TERMINATE_PROJECT_DECREASED_QUORUM_PERIOD: u64 = 7 * DAY;

/// Who may open a voting of a given type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Opener {
    /// Opened automatically when a tap becomes current.
    Controller,
    ProjectOwner,
    Investor,
}

pub fn opener(voting_type: VotingType) -> Opener {
    match voting_type {
        VotingType::ReleaseTap => Opener::Controller,
        VotingType::ReleaseTapDecreasedQuorum => Opener::ProjectOwner,
        VotingType::ChangeRoadmap
        | VotingType::ChangeRoadmapDecreasedQuorum
        | VotingType::TerminateProject
        | VotingType::TerminateProjectDecreasedQuorum => Opener::Investor,
    }
}

/// Floored whole percentage of `part` in `whole`. Rounding down keeps a
/// borderline tally on the non-accepting side.
pub fn percent_of(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    let rate = (part as u128) * (PERCENT as u128) / (whole as u128);
    rate.min(u64::MAX as u128) as u64
}

/// Outcome of a tally. Same inputs always give the same outcome.
///
/// Accept needs `yes > no` on top of `yes * 100 / total >= approval_rate`.
/// This departs from the bare rate comparison: an exact yes/no tie never
/// accepts, even when the approval rate is at or below 50%.
pub fn voting_outcome(
    yes_count: u64,
    no_count: u64,
    holders: u64,
    quorum_rate: u64,
    vote_rate: u64,
) -> VotingOutcome {
    let total = yes_count.saturating_add(no_count);
    if total == 0 || percent_of(total, holders) < quorum_rate {
        return VotingOutcome::QuorumNotReached;
    }

    if percent_of(yes_count, total) >= vote_rate && yes_count > no_count {
        VotingOutcome::Accept
    } else if percent_of(no_count, total) >= vote_rate {
        VotingOutcome::Decline
    } else {
        VotingOutcome::NoDecision
    }
}

/// Escalation table: may a voting of type `requested` follow a closed voting
/// of type `last_type` that resolved to `last_outcome`?
pub fn can_open_voting(
    last_type: VotingType,
    last_outcome: VotingOutcome,
    requested: VotingType,
) -> bool {
    use VotingOutcome::*;

    match requested {
        // only the controller schedules these, never on request
        VotingType::ReleaseTap => false,
        VotingType::ReleaseTapDecreasedQuorum => {
            last_type.is_release_tap() && last_outcome == QuorumNotReached
        }
        VotingType::ChangeRoadmap => match last_outcome {
            NoDecision => last_type.is_release_tap(),
            Decline => last_type.is_terminate_project(),
            Accept | QuorumNotReached => false,
        }
        VotingType::ChangeRoadmapDecreasedQuorum => {
            last_type.is_change_roadmap() && matches!(last_outcome, QuorumNotReached | NoDecision)
        }
        VotingType::TerminateProject => {
            (last_type.is_release_tap() || last_type.is_change_roadmap()) && last_outcome == Decline
        }
        VotingType::TerminateProjectDecreasedQuorum => {
            last_type.is_terminate_project()
                && matches!(last_outcome, QuorumNotReached | NoDecision)
        }
    }
}

pub fn quorum_rate_for(voting_type: VotingType, min_quorum_rate: u64) -> u64 {
    if voting_type.is_decreased_quorum() {
        DECREASED_QUORUM_RATE.min(min_quorum_rate)
    } else {
        min_quorum_rate
    }
}

/// `[created_at, finish_at)` of a ReleaseTap voting: the last
/// `RELEASE_TAP_PERIOD` before the tap deadline, or starting right away when
/// the tap became current too late for that.
pub fn release_tap_window(now: u64, tap_deadline: u64) -> (u64, u64) {
    let created_at = tap_deadline.saturating_sub(RELEASE_TAP_PERIOD).max(now);
    (created_at, created_at + RELEASE_TAP_PERIOD)
}

/// `[created_at, finish_at)` of a voting opened on request at `now`.
pub fn requested_voting_window(voting_type: VotingType, now: u64) -> (u64, u64) {
    let (delay, period) = match voting_type {
        VotingType::ReleaseTap | VotingType::ReleaseTapDecreasedQuorum => (0, RELEASE_TAP_PERIOD),
        VotingType::ChangeRoadmap => (CHANGE_ROADMAP_DELAY, CHANGE_ROADMAP_PERIOD),
        VotingType::ChangeRoadmapDecreasedQuorum => (
            CHANGE_ROADMAP_DECREASED_QUORUM_DELAY,
            CHANGE_ROADMAP_DECREASED_QUORUM_PERIOD,
        ),
        VotingType::TerminateProject => (0, TERMINATE_PROJECT_PERIOD),
        VotingType::TerminateProjectDecreasedQuorum => {
            (0, TERMINATE_PROJECT_DECREASED_QUORUM_PERIOD)
        }
    };
    (now + delay, now + delay + period)
}
