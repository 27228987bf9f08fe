//! Profile id allocation.
//!
//! Ids have the form `p<n>`. The counter only moves forward, so an id is
//! never handed out twice by the same sequence, even after deletes.

use crate::domain::Profile;

/// Suffixes are read as `u64` and counted in `u128`, so seeding past the
/// largest readable suffix cannot overflow.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u128,
}

impl IdSequence {
    /// Start past both the highest `p<n>` suffix and the record count of
    /// `profiles`.
    pub fn seeded_from(profiles: &[Profile]) -> Self {
        let highest = profiles
            .iter()
            .filter_map(|p| numeric_suffix(&p.id))
            .max()
            .unwrap_or(0);

        Self {
            next: u128::from(highest).max(profiles.len() as u128) + 1,
        }
    }

    /// Issue the next id for which `taken` is false.
    pub fn issue(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = format!("p{}", self.next);
            self.next += 1;
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}

fn numeric_suffix(id: &str) -> Option<u64> {
    id.strip_prefix('p')?.parse().ok()
}
