use bevy::math::Vec3;

/// Why the gate found nothing to follow
///
/// Bookkeeping only: every reason leads to the same FAILURE and the same cleanup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoTargetReason {
    /// Actor has no world position
    NoPosition,
    /// Actor has no AttackInProximity radius configured
    Unconfigured,
    /// No candidate within max distance
    OutOfRange,
    /// Candidates in range, but the actor carries no follow intent to fill in
    NoFollowIntent,
}

/// Outcome of one proximity check
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Evaluation<Id> {
    NoTarget(NoTargetReason),
    TargetAcquired(Id),
}

/// Status reported to the behaviour tree for one tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeStatus {
    Running,
    Failure,
}

impl<Id> Evaluation<Id> {
    pub fn status(&self) -> NodeStatus {
        match self {
            Evaluation::TargetAcquired(_) => NodeStatus::Running,
            Evaluation::NoTarget(_) => NodeStatus::Failure,
        }
    }
}

/// Decide whether any candidate is close enough to `actor_position` to keep following
///
/// - Candidates are scanned in iteration order, no sorting
/// - In range means squared distance <= max_distance², boundary included
/// - The first in-range candidate wins, even when a later one is closer
/// - A missing follow intent fails even with candidates in range: the record
///   has to exist already for the gate to fill it in
///
/// Holds no state; the caller re-queries candidates every tick.
pub fn evaluate<Id, I>(
    actor_position: Option<Vec3>,
    candidates: I,
    max_distance: f32,
    has_follow_intent: bool,
) -> Evaluation<Id>
where
    I: IntoIterator<Item = (Id, Vec3)>,
{
    let Some(actor_position) = actor_position else {
        return Evaluation::NoTarget(NoTargetReason::NoPosition);
    };
    let max_distance_squared = max_distance * max_distance;

    let first_in_range = candidates
        .into_iter()
        .find(|&(_, position)| position.distance_squared(actor_position) <= max_distance_squared);

    let Some((id, _)) = first_in_range else {
        return Evaluation::NoTarget(NoTargetReason::OutOfRange);
    };

    if !has_follow_intent {
        return Evaluation::NoTarget(NoTargetReason::NoFollowIntent);
    }

    Evaluation::TargetAcquired(id)
}
