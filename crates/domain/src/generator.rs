use std::collections::HashSet;

use log::debug;
use rand::{Rng, seq::SliceRandom};

use crate::{
    Exercise, ExerciseID, Mode, Pairing, SetIdSource, Station, WorkoutOptions, WorkoutSet,
};

/// Builds a workout from the catalog.
///
/// Emits at most `options.count` exercises and never repeats an exercise. Generation stops
/// early once no unused exercise is left in the candidate pool, so the result may be shorter
/// than requested or empty.
pub fn generate<R: Rng + ?Sized>(
    catalog: &[Exercise],
    options: &WorkoutOptions,
    rng: &mut R,
    ids: &mut impl SetIdSource,
) -> Vec<WorkoutSet> {
    let mut context = Generation::new(catalog, options, rng);
    let count = *options.count as usize;
    let mut sets = vec![];
    let mut added = 0;

    if context.pool.is_empty() {
        debug!("no exercises available for {:?}", options.body_areas);
        return sets;
    }

    while added < count {
        let Some(first) = context.pick_primary(rng) else {
            debug!("candidate pool exhausted after {added} of {count} exercises");
            break;
        };

        let second = match options.mode {
            Mode::Superset(pairing) if added + 1 < count => {
                let second = context.pick_partner(first, pairing, rng);
                if second.is_none() {
                    debug!("no {} partner for {}", pairing.name(), first.id);
                }
                second
            }
            _ => None,
        };

        match second {
            Some(second) => {
                sets.push(WorkoutSet::superset(
                    ids.next_set_id(),
                    first.into(),
                    second.into(),
                ));
                added += 2;
            }
            None => {
                sets.push(WorkoutSet::regular(ids.next_set_id(), first.into()));
                added += 1;
            }
        }
    }

    debug!("generated {} sets with {added} exercises", sets.len());

    sets
}

/// Mutable state of a single generation run.
struct Generation<'a> {
    pool: Vec<&'a Exercise>,
    used: HashSet<&'a ExerciseID>,
    stations: Option<StationQueue>,
}

/// Stations in the order they are worked through. The position never moves backwards.
struct StationQueue {
    order: Vec<Station>,
    position: usize,
}

impl<'a> Generation<'a> {
    fn new<R: Rng + ?Sized>(
        catalog: &'a [Exercise],
        options: &WorkoutOptions,
        rng: &mut R,
    ) -> Self {
        let pool = catalog
            .iter()
            .filter(|e| options.body_areas.contains(&e.target_muscle))
            .collect::<Vec<_>>();

        let stations = options.group_by_station.then(|| {
            let mut order = Vec::new();
            for exercise in &pool {
                if !order.contains(&exercise.station) {
                    order.push(exercise.station);
                }
            }
            order.shuffle(rng);
            StationQueue { order, position: 0 }
        });

        Self {
            pool,
            used: HashSet::new(),
            stations,
        }
    }

    fn unused(&self) -> impl Iterator<Item = &'a Exercise> {
        self.pool
            .iter()
            .copied()
            .filter(|e| !self.used.contains(&e.id))
    }

    fn primary_candidates(&mut self) -> Vec<&'a Exercise> {
        let Some(mut position) = self.stations.as_ref().map(|q| q.position) else {
            return self.unused().collect();
        };
        let mut candidates = vec![];

        while let Some(station) = self
            .stations
            .as_ref()
            .and_then(|q| q.order.get(position))
            .copied()
        {
            candidates = self.unused().filter(|e| e.station == station).collect();
            if !candidates.is_empty() {
                break;
            }
            position += 1;
        }

        if let Some(queue) = &mut self.stations {
            queue.position = position;
        }

        candidates
    }

    fn pick_primary<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'a Exercise> {
        let candidates = self.primary_candidates();
        self.draw(&candidates, rng)
    }

    fn pick_partner<R: Rng + ?Sized>(
        &mut self,
        first: &'a Exercise,
        pairing: Pairing,
        rng: &mut R,
    ) -> Option<&'a Exercise> {
        let grouped = self.stations.is_some();
        let pool = self
            .pool
            .iter()
            .copied()
            .filter(|e| !grouped || e.station == first.station)
            .collect::<Vec<_>>();

        let candidates = match pairing {
            Pairing::Agonist => pool
                .into_iter()
                .filter(|e| e.target_muscle == first.target_muscle && e.id != first.id)
                .collect::<Vec<_>>(),
            Pairing::Antagonist => {
                let movement = first.movement.antagonist();
                let antagonists = pool
                    .iter()
                    .copied()
                    .filter(|e| e.movement == movement)
                    .collect::<Vec<_>>();
                if antagonists.is_empty() {
                    pool.into_iter()
                        .filter(|e| e.target_muscle != first.target_muscle)
                        .collect()
                } else {
                    antagonists
                }
            }
            Pairing::Random => pool.into_iter().filter(|e| e.id != first.id).collect(),
        };

        self.draw(&candidates, rng)
    }

    /// Draws an unused exercise uniformly from `candidates` and marks it as used.
    fn draw<R: Rng + ?Sized>(
        &mut self,
        candidates: &[&'a Exercise],
        rng: &mut R,
    ) -> Option<&'a Exercise> {
        let unused = candidates
            .iter()
            .copied()
            .filter(|e| !self.used.contains(&e.id))
            .collect::<Vec<_>>();

        if unused.is_empty() {
            return None;
        }

        let exercise = unused[rng.random_range(0..unused.len())];
        self.used.insert(&exercise.id);
        Some(exercise)
    }
}
