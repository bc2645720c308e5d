#![allow(missing_docs)]

use contagion::simulation::contacts::ContactMode;
use contagion::simulation::disease::DiseaseState;
use contagion::simulation::model::Simulation;
use contagion::simulation::params::Params;
use contagion::simulation::particle::Particle;
use contagion::simulation::vector::Vector2;
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = DiseaseState> {
    prop_oneof![
        Just(DiseaseState::Vulnerable),
        (0u32..10).prop_map(|age| DiseaseState::Infected { age }),
        Just(DiseaseState::Immune),
    ]
}

fn arb_mode() -> impl Strategy<Value = ContactMode> {
    prop_oneof![Just(ContactMode::Sequential), Just(ContactMode::Snapshot)]
}

fn rank(state: DiseaseState) -> u8 {
    match state {
        DiseaseState::Vulnerable => 0,
        DiseaseState::Infected { .. } => 1,
        DiseaseState::Immune => 2,
    }
}

proptest! {
    #[test]
    fn distance_is_symmetric(
        ax in -1e3f64..1e3, ay in -1e3f64..1e3,
        bx in -1e3f64..1e3, by in -1e3f64..1e3,
    ) {
        let a = Vector2::new(ax, ay);
        let b = Vector2::new(bx, by);
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert_eq!(a.distance(a), 0.0);
        prop_assert!(a.distance(b) >= 0.0);
    }

    #[test]
    fn contact_is_symmetric(a_state in arb_state(), b_state in arb_state()) {
        let mut a1 = Particle::new(Vector2::new(0.0, 0.0), Vector2::default());
        let mut b1 = Particle::new(Vector2::new(1.0, 0.0), Vector2::default());
        a1.state = a_state;
        b1.state = b_state;
        let (mut a2, mut b2) = (a1.clone(), b1.clone());

        a1.contact_with(&mut b1);
        b2.contact_with(&mut a2);

        prop_assert_eq!(a1, a2);
        prop_assert_eq!(b1, b2);
    }

    #[test]
    fn particles_stay_in_bounds(
        seed in any::<u64>(),
        speed in 0.0f64..80.0,
        population in 2usize..30,
        ticks in 0usize..120,
        mode in arb_mode(),
    ) {
        let params = Params { contact_mode: mode, ..Params::default() };
        let mut sim = Simulation::with_seed(params.clone(), population, speed, 1, 0, seed).unwrap();

        for _ in 0..ticks {
            sim.tick();
            for particle in &sim.population {
                prop_assert!(params.bounds.contains(particle.location));
            }
        }
        prop_assert_eq!(sim.population.len(), population);
    }

    #[test]
    fn disease_states_only_move_forward(
        seed in any::<u64>(),
        population in 2usize..40,
        recovery_period in 1u32..20,
        mode in arb_mode(),
    ) {
        let params = Params {
            recovery_period,
            contact_radius: 40.0,
            contact_mode: mode,
            ..Params::default()
        };
        let mut sim = Simulation::with_seed(params, population, 10.0, 1, 0, seed).unwrap();
        let mut ranks: Vec<u8> = sim.population.iter().map(|p| rank(p.state)).collect();

        for _ in 0..100 {
            sim.tick();
            for (before, particle) in ranks.iter_mut().zip(&sim.population) {
                let now = rank(particle.state);
                prop_assert!(now >= *before);
                *before = now;
            }
        }
    }

    #[test]
    fn census_matches_seeding(
        seed in any::<u64>(),
        population in 2usize..60,
        infected_frac in 0.0f64..1.0,
        immune_frac in 0.0f64..1.0,
    ) {
        let infected = 1 + ((population - 1) as f64 * infected_frac) as usize;
        let infected = infected.min(population - 1);
        let immune = ((population - infected) as f64 * immune_frac) as usize;

        let sim = Simulation::with_seed(Params::default(), population, 1.0, infected, immune, seed)
            .unwrap();
        let census = sim.census();

        prop_assert_eq!(census.infected, infected);
        prop_assert_eq!(census.immune, immune);
        prop_assert_eq!(census.total(), population);
    }
}
