//! Status Resolver - assigns each projected slot its lifecycle status.
//!
//! Resolution happens in two steps. First the slot claims records: at most
//! one confirmed cycle and at most one planned litter, each consumed so it
//! can never satisfy a second slot of the same animal. Then the ordered rule
//! list below is evaluated over the claimed facts; the first rule that fires
//! decides the status.
//!
//! | Order | Rule      | Fires when                                      |
//! |-------|-----------|-------------------------------------------------|
//! | 1     | confirmed | a confirmed cycle was claimed                   |
//! | 2     | planned   | a planned litter was claimed                    |
//! | 3     | overdue   | the slot date is strictly before today          |
//! | 4     | predicted | always                                          |
//!
//! Planned litters match within `±tolerance` of the slot date. Confirmed
//! cycles are actual heats, so each one belongs to the slot it is nearest
//! to: the window widens to half the slot interval when that exceeds the
//! tolerance. Windows of consecutive open slots therefore tile the timeline
//! and every confirmed cycle after the anchor finds a slot.

use chrono::NaiveDate;

use super::prediction::HeatStatus;
use crate::domain::foundation::AnimalId;
use crate::domain::records::{ConfirmedHeatCycle, PlannedLitter, SlotClaim};

/// Everything the rules need to know about one slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotFacts<'a> {
    pub date: NaiveDate,
    pub today: NaiveDate,
    pub confirmed: Option<&'a ConfirmedHeatCycle>,
    pub planned: Option<&'a PlannedLitter>,
}

type StatusRule = fn(&SlotFacts<'_>) -> Option<HeatStatus>;

/// Rules in precedence order.
pub const RESOLUTION_ORDER: [(&str, StatusRule); 4] = [
    ("confirmed", confirmed_rule),
    ("planned", planned_rule),
    ("overdue", overdue_rule),
    ("predicted", predicted_rule),
];

fn confirmed_rule(facts: &SlotFacts<'_>) -> Option<HeatStatus> {
    facts.confirmed.map(|_| HeatStatus::Confirmed)
}

fn planned_rule(facts: &SlotFacts<'_>) -> Option<HeatStatus> {
    facts.planned.map(|_| HeatStatus::Planned)
}

fn overdue_rule(facts: &SlotFacts<'_>) -> Option<HeatStatus> {
    (facts.date < facts.today).then_some(HeatStatus::Overdue)
}

fn predicted_rule(_facts: &SlotFacts<'_>) -> Option<HeatStatus> {
    Some(HeatStatus::Predicted)
}

/// Evaluates the ordered rule list; the first match wins.
pub fn apply_rules(facts: &SlotFacts<'_>) -> HeatStatus {
    RESOLUTION_ORDER
        .iter()
        .find_map(|(_, rule)| rule(facts))
        .unwrap_or_default()
}

/// Outcome of resolving one slot.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    /// Final slot date: the confirmed date if one was claimed.
    pub date: NaiveDate,
    pub status: HeatStatus,
    pub confirmed: Option<&'a ConfirmedHeatCycle>,
    pub planned: Option<&'a PlannedLitter>,
}

impl Resolution<'_> {
    /// Notes carried onto the prediction, confirmed notes first.
    pub fn notes(&self) -> Option<String> {
        self.confirmed
            .and_then(|c| c.notes())
            .or_else(|| self.planned.and_then(|p| p.notes()))
            .map(str::to_string)
    }
}

/// Days either side of a projected slot within which a confirmed cycle is
/// taken to be that slot's heat.
pub fn confirmation_reach(interval_days: i64, tolerance_days: i64) -> i64 {
    tolerance_days.max(0).max(interval_days / 2)
}

/// Records of one kind for one animal, each claimable once.
struct ClaimPool<'a, T> {
    records: Vec<&'a T>,
    claimed: Vec<bool>,
}

impl<'a, T: SlotClaim> ClaimPool<'a, T> {
    fn for_animal(animal_id: &AnimalId, records: &'a [T]) -> Self {
        let mut records: Vec<&'a T> = records
            .iter()
            .filter(|record| record.animal_id() == animal_id)
            .collect();
        records.sort_by_key(|record| (record.claim_date(), record.claim_key()));
        let claimed = vec![false; records.len()];
        Self { records, claimed }
    }

    /// Claims the earliest unclaimed record within `reach_days` of `target`
    /// that lies strictly after `after`.
    fn claim(&mut self, target: NaiveDate, after: NaiveDate, reach_days: i64) -> Option<&'a T> {
        self.claim_first(|date| date > after && (date - target).num_days().abs() <= reach_days)
    }

    fn claim_first(&mut self, accepts: impl Fn(NaiveDate) -> bool) -> Option<&'a T> {
        let index = (0..self.records.len())
            .find(|&i| !self.claimed[i] && accepts(self.records[i].claim_date()))?;
        self.claimed[index] = true;
        Some(self.records[index])
    }

    /// Marks every record dated on or before `date` as resolved.
    fn settle_through(&mut self, date: NaiveDate) {
        for (record, claimed) in self.records.iter().zip(self.claimed.iter_mut()) {
            if record.claim_date() <= date {
                *claimed = true;
            }
        }
    }

    fn unclaimed(&self) -> usize {
        self.claimed.iter().filter(|claimed| !**claimed).count()
    }
}

/// Resolves the slots of one animal, in chronological order.
///
/// Holds the claim state for that animal, so a fresh resolver is built per
/// animal and per snapshot.
pub struct StatusResolver<'a> {
    today: NaiveDate,
    tolerance_days: i64,
    confirmed: ClaimPool<'a, ConfirmedHeatCycle>,
    planned: ClaimPool<'a, PlannedLitter>,
}

impl<'a> StatusResolver<'a> {
    pub fn for_animal(
        animal_id: &AnimalId,
        confirmed: &'a [ConfirmedHeatCycle],
        planned: &'a [PlannedLitter],
        today: NaiveDate,
        tolerance_days: i64,
    ) -> Self {
        Self {
            today,
            tolerance_days: tolerance_days.max(0),
            confirmed: ClaimPool::for_animal(animal_id, confirmed),
            planned: ClaimPool::for_animal(animal_id, planned),
        }
    }

    /// Treats records dated on or before the anchor heat as already resolved.
    ///
    /// They describe heats the projection starts after, so no slot can
    /// claim them and they are not reported as unmatched.
    pub fn settle_through(&mut self, anchor: NaiveDate) {
        self.confirmed.settle_through(anchor);
        self.planned.settle_through(anchor);
    }

    /// Starts the chain of an animal without logged heats at its earliest
    /// confirmed cycle dated on or before `latest`.
    ///
    /// A planned litter within tolerance of that heat is claimed with it.
    pub fn resolve_first_confirmed(&mut self, latest: NaiveDate) -> Option<Resolution<'a>> {
        let confirmed = self.confirmed.claim_first(|date| date <= latest)?;
        let date = confirmed.date;
        let tolerance = self.tolerance_days;
        let planned = self
            .planned
            .claim_first(|planned| (planned - date).num_days().abs() <= tolerance);
        Some(self.finish(date, Some(confirmed), planned))
    }

    /// Resolves the slot projected at `projected`, where `previous` is the
    /// date of the slot before it (or the anchor heat).
    ///
    /// Slots must be resolved in chronological order.
    pub fn resolve(&mut self, projected: NaiveDate, previous: NaiveDate) -> Resolution<'a> {
        let reach = confirmation_reach((projected - previous).num_days(), self.tolerance_days);
        let confirmed = self.confirmed.claim(projected, previous, reach);
        let date = confirmed.map_or(projected, |record| record.date);
        let planned = self.planned.claim(date, previous, self.tolerance_days);
        self.finish(date, confirmed, planned)
    }

    fn finish(
        &self,
        date: NaiveDate,
        confirmed: Option<&'a ConfirmedHeatCycle>,
        planned: Option<&'a PlannedLitter>,
    ) -> Resolution<'a> {
        let facts = SlotFacts {
            date,
            today: self.today,
            confirmed,
            planned,
        };

        Resolution {
            date,
            status: apply_rules(&facts),
            confirmed,
            planned,
        }
    }

    /// Confirmed cycles of this animal no slot has claimed.
    pub fn unclaimed_confirmed(&self) -> usize {
        self.confirmed.unclaimed()
    }

    /// Planned litters of this animal no slot has claimed.
    pub fn unclaimed_planned(&self) -> usize {
        self.planned.unclaimed()
    }
}
