use crate::generator::pick;
use crate::model::{carpet_area_for, ProjectDefinition, StatusEvent, Unit};
use rand::Rng;

/// Sale statuses a freshly generated unit can carry.
pub const STATUSES: &[&str] = &["available", "reserved", "booked", "sold"];

/// Amenity labels; every unit gets two distinct ones.
pub const AMENITIES: &[&str] = &[
    "Balcony",
    "Parking",
    "Club Access",
    "Garden View",
    "Main Road Facing",
];

/// Starting value for the shared id counter. The counter is incremented
/// before the first use, so the first emitted id is "u101".
pub const ID_START: u64 = 100;

const PRICE_PER_FLOOR: i64 = 50_000;
const AMENITIES_PER_UNIT: usize = 2;
const LISTED_DATE: &str = "2024-01-15";

/// Streaming generator of [`Unit`] records.
///
/// Enumerates every (project × floor × slot) combination in order:
/// projects in sequence, floors ascending over the inclusive range,
/// slots 1 through `units_per_floor`. One unit is synthesized per
/// combination; nothing is buffered.
///
/// The RNG is a type parameter so callers can seed it for reproducible
/// output (`StdRng::seed_from_u64`) or draw from OS entropy.
///
/// # Example
///
/// ```
/// use estate_fixtures::generator::UnitGenerator;
/// use estate_fixtures::model::default_projects;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let rng = StdRng::seed_from_u64(42);
/// let generator = UnitGenerator::new(default_projects(), rng);
/// assert_eq!(generator.total_units(), 66);
/// ```
pub struct UnitGenerator<R: Rng> {
    projects: Vec<ProjectDefinition>,
    rng: R,
    /// Shared id counter, pre-incremented for every unit across all projects.
    counter: u64,
    project_idx: usize,
    floor: i32,
    slot: u32,
}

impl<R: Rng> UnitGenerator<R> {
    #[must_use]
    pub fn new(projects: Vec<ProjectDefinition>, rng: R) -> Self {
        let floor = projects.first().map_or(0, ProjectDefinition::start_floor);
        Self {
            projects,
            rng,
            counter: ID_START,
            project_idx: 0,
            floor,
            slot: 1,
        }
    }

    /// Total number of units this generator will emit.
    #[must_use]
    pub fn total_units(&self) -> usize {
        self.projects.iter().map(ProjectDefinition::unit_count).sum()
    }

    fn synthesize(&mut self, floor: i32, slot: u32) -> Unit {
        self.counter += 1;
        let project = &self.projects[self.project_idx];
        let rng = &mut self.rng;

        // Type and base price are positionally paired, so one index draw
        // covers both.
        let type_idx = pick::choose_index(rng, project.unit_types.len());
        let unit_type = project.unit_types[type_idx].clone();
        let price = project.base_prices[type_idx] + i64::from(floor) * PRICE_PER_FLOOR;
        let carpet_area = carpet_area_for(&unit_type);

        Unit {
            id: format!("u{}", self.counter),
            unit_no: format!("{}-{}0{}", project.unit_prefix, floor, slot),
            project_name: project.name.clone(),
            tower_name: project.tower.clone(),
            floor,
            unit_type,
            carpet_area,
            price,
            price_per_sq_ft: price / i64::from(carpet_area),
            status: pick::choose(rng, STATUSES).to_string(),
            status_history: vec![StatusEvent {
                date: LISTED_DATE.to_string(),
                status: "Listed".to_string(),
                user: "System".to_string(),
            }],
            amenities: pick::sample_distinct(rng, AMENITIES, AMENITIES_PER_UNIT),
        }
    }
}

impl<R: Rng> Iterator for UnitGenerator<R> {
    type Item = Unit;

    fn next(&mut self) -> Option<Unit> {
        loop {
            let project = self.projects.get(self.project_idx)?;

            if self.floor > project.end_floor() {
                self.project_idx += 1;
                if let Some(next) = self.projects.get(self.project_idx) {
                    self.floor = next.start_floor();
                    self.slot = 1;
                }
                continue;
            }
            if self.slot > project.units_per_floor {
                self.floor += 1;
                self.slot = 1;
                continue;
            }

            let slot = self.slot;
            let floor = self.floor;
            self.slot += 1;
            return Some(self.synthesize(floor, slot));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_projects;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate_all(seed: u64) -> Vec<Unit> {
        UnitGenerator::new(default_projects(), StdRng::seed_from_u64(seed)).collect()
    }

    fn single_project(
        prefix: &str,
        floors: [i32; 2],
        per_floor: u32,
        types: &[(&str, i64)],
    ) -> ProjectDefinition {
        ProjectDefinition {
            name: "Test Project".to_string(),
            tower: "Tower T".to_string(),
            floor_range: floors,
            units_per_floor: per_floor,
            unit_prefix: prefix.to_string(),
            unit_types: types.iter().map(|(t, _)| (*t).to_string()).collect(),
            base_prices: types.iter().map(|(_, p)| *p).collect(),
        }
    }

    #[test]
    fn emits_one_unit_per_floor_slot_combination() {
        let units = generate_all(42);
        // 28 + 20 + 18 across the three default projects
        assert_eq!(units.len(), 66);
    }

    #[test]
    fn ids_are_unique_and_strictly_increasing_from_u101() {
        let units = generate_all(42);
        assert_eq!(units[0].id, "u101");

        let numbers: Vec<u64> = units
            .iter()
            .map(|u| u.id.trim_start_matches('u').parse().expect("numeric id"))
            .collect();
        for pair in numbers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(*numbers.last().expect("non-empty"), 166);
    }

    #[test]
    fn unit_numbers_follow_prefix_floor_slot_format() {
        let project = single_project("A", [3, 3], 4, &[("2 BHK", 7_500_000)]);
        let units: Vec<Unit> =
            UnitGenerator::new(vec![project], StdRng::seed_from_u64(1)).collect();

        let numbers: Vec<&str> = units.iter().map(|u| u.unit_no.as_str()).collect();
        assert_eq!(numbers, vec!["A-301", "A-302", "A-303", "A-304"]);
    }

    #[test]
    fn price_adds_floor_premium_to_the_chosen_base() {
        let project = single_project("P", [5, 5], 1, &[("3 BHK", 10_500_000)]);
        let units: Vec<Unit> =
            UnitGenerator::new(vec![project], StdRng::seed_from_u64(1)).collect();

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].price, 10_750_000);
        assert_eq!(units[0].carpet_area, 1200);
        assert_eq!(units[0].price_per_sq_ft, 8958);
    }

    #[test]
    fn carpet_area_and_price_per_sq_ft_are_consistent() {
        for unit in generate_all(7) {
            assert_eq!(unit.carpet_area, carpet_area_for(&unit.unit_type));
            assert!([850, 1200, 1800, 500].contains(&unit.carpet_area));
            assert_eq!(unit.price_per_sq_ft, unit.price / i64::from(unit.carpet_area));
        }
    }

    #[test]
    fn every_unit_gets_two_distinct_amenities() {
        for unit in generate_all(7) {
            assert_eq!(unit.amenities.len(), 2);
            assert_ne!(unit.amenities[0], unit.amenities[1]);
            assert!(AMENITIES.contains(&unit.amenities[0].as_str()));
            assert!(AMENITIES.contains(&unit.amenities[1].as_str()));
        }
    }

    #[test]
    fn status_is_drawn_from_the_vocabulary() {
        for unit in generate_all(7) {
            assert!(STATUSES.contains(&unit.status.as_str()));
        }
    }

    #[test]
    fn status_history_is_the_listed_singleton() {
        for unit in generate_all(7) {
            assert_eq!(
                unit.status_history,
                vec![StatusEvent {
                    date: "2024-01-15".to_string(),
                    status: "Listed".to_string(),
                    user: "System".to_string(),
                }]
            );
        }
    }

    #[test]
    fn types_and_base_prices_stay_paired() {
        let units = generate_all(11);
        // Tower A floor premium is floor * 50_000 over one of two bases.
        for unit in units.iter().filter(|u| u.tower_name == "Tower A") {
            let base = unit.price - i64::from(unit.floor) * 50_000;
            match unit.unit_type.as_str() {
                "2 BHK" => assert_eq!(base, 7_500_000),
                "3 BHK" => assert_eq!(base, 10_500_000),
                other => panic!("unexpected type in Tower A: {other}"),
            }
        }
    }

    #[test]
    fn counter_is_shared_across_projects() {
        let units = generate_all(42);
        let first_of_second_project = units
            .iter()
            .find(|u| u.tower_name == "Tower B")
            .expect("Tower B units");
        // Tower A contributes 28 units, so Tower B starts at 101 + 28.
        assert_eq!(first_of_second_project.id, "u129");
    }

    #[test]
    fn same_seed_reproduces_the_same_output() {
        assert_eq!(generate_all(42), generate_all(42));
    }

    #[test]
    fn empty_project_list_yields_nothing() {
        let mut generator = UnitGenerator::new(Vec::new(), StdRng::seed_from_u64(1));
        assert!(generator.next().is_none());
        assert_eq!(generator.total_units(), 0);
    }
}
