use super::*;
use crate::error::GameError;
use crate::rng::XorShiftRng;
use crate::types::Side;

#[test]
fn test_empty_roster() {
    let roster = Roster::new(Vec::new()).unwrap();
    assert!(roster.is_empty());
    assert_eq!(roster.slots().len(), 5);
    assert!(roster.slots().iter().all(Option::is_none));
    assert_eq!(roster, Roster::empty());
}

#[test]
fn test_partial_roster_is_padded() {
    let roster = roster(vec![named("A", 1, 1), named("B", 1, 1)]);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.slots().len(), 5);
    assert!(roster.slots()[2..].iter().all(Option::is_none));
}

#[test]
fn test_six_units_overflow() {
    let units: Vec<Unit> = (0..6).map(|_| grunt(1, 1)).collect();
    assert_eq!(
        Roster::from_units(units).unwrap_err(),
        GameError::RosterOverflow {
            count: 6,
            capacity: 5
        }
    );
}

#[test]
fn test_empty_entries_do_not_count() {
    let roster = Roster::new((0..6).map(|_| None)).unwrap();
    assert!(roster.is_empty());

    let mut entries: Vec<Option<Unit>> = (0..5).map(|_| Some(grunt(1, 1))).collect();
    entries.insert(2, None);
    entries.push(None);
    let roster = Roster::new(entries).unwrap();
    assert_eq!(roster.len(), 5);
    assert_eq!(roster.slots().len(), 5);
}

#[test]
fn test_validate_packs_and_prunes() {
    let dead = named("Dead", 1, 0);
    let roster = Roster::new(vec![
        None,
        Some(named("S", 1, 1)),
        None,
        Some(named("F", 1, 1)),
        Some(dead),
    ])
    .unwrap();

    assert_eq!(names(&roster), vec!["S", "F"]);
    assert!(roster.get(0).unwrap().is_some());
    assert!(roster.get(1).unwrap().is_some());
    assert!(roster.slots()[2..].iter().all(Option::is_none));
}

#[test]
fn test_validate_holes_keep_order() {
    let roster = Roster::new(vec![
        None,
        Some(named("S", 1, 1)),
        None,
        Some(named("F", 1, 1)),
        Some(named("A", 1, 1)),
    ])
    .unwrap();
    assert_eq!(names(&roster), vec!["S", "F", "A"]);
    assert_eq!(roster.get(0).unwrap().map(Unit::name), Some("S"));
    assert_eq!(roster.get(2).unwrap().map(Unit::name), Some("A"));
    assert!(roster.get(3).unwrap().is_none());
}

#[test]
fn test_validate_all_dead() {
    let mut roster = Roster::empty();
    roster.set(0, Some(grunt(1, 1))).unwrap();
    roster.iter_mut().for_each(|u| u.temp_buff(0, -1));

    let pruned = roster.validate().unwrap();
    assert_eq!(pruned.len(), 1);
    assert!(roster.is_empty());
}

#[test]
fn test_validate_is_idempotent() {
    let mut roster = Roster::new(vec![
        Some(named("A", 1, 0)),
        None,
        Some(named("B", 2, 2)),
        Some(named("C", 3, 3)),
    ])
    .unwrap();
    let before: Vec<_> = roster.ids();

    assert!(roster.validate().unwrap().is_empty());
    assert!(roster.validate().unwrap().is_empty());
    assert_eq!(roster.ids(), before);
    assert_eq!(names(&roster), vec!["B", "C"]);
}

#[test]
fn test_equality_ignores_padding_and_identity() {
    let a = Roster::new(vec![None, Some(named("Fish", 2, 3)), None]).unwrap();
    let b = roster(vec![named("Fish", 2, 3)]);
    assert_eq!(a, b);

    let c = roster(vec![named("Fish", 2, 3), named("Ant", 2, 1)]);
    assert_ne!(a, c);
    assert_ne!(b, roster(vec![named("Fish", 2, 4)]));
}

#[test]
fn test_get_negative_indices() {
    let roster = roster(vec![
        named("A", 1, 1),
        named("B", 1, 1),
        named("C", 1, 1),
        named("D", 1, 1),
        named("E", 1, 1),
    ]);
    assert_eq!(roster.get(-1).unwrap().map(Unit::name), Some("E"));
    assert_eq!(roster.get(-5).unwrap().map(Unit::name), Some("A"));
    assert_eq!(roster.get(4).unwrap().map(Unit::name), Some("E"));
}

#[test]
fn test_get_out_of_bounds() {
    let roster = roster(vec![grunt(1, 1)]);
    assert_eq!(
        roster.get(100).unwrap_err(),
        GameError::OutOfBounds {
            index: 100,
            capacity: 5
        }
    );
    assert_eq!(
        roster.get(-6).unwrap_err(),
        GameError::OutOfBounds {
            index: -6,
            capacity: 5
        }
    );
    assert!(roster.get(5).is_err());
}

#[test]
fn test_get_empty_slot_is_none() {
    let roster = roster(vec![grunt(1, 1)]);
    assert!(roster.get(3).unwrap().is_none());
    assert!(roster.get(-1).unwrap().is_none());
}

#[test]
fn test_index_of_uses_identity() {
    let fish = named("Fish", 2, 3);
    let twin = fish.fresh_copy();
    let fish_id = fish.id();
    let roster = roster(vec![named("Ant", 1, 1), fish]);

    assert_eq!(roster.index_of(fish_id), Ok(1));
    assert!(roster.contains(fish_id));
    // Equal by value but not the same unit.
    assert_eq!(
        roster.index_of(twin.id()),
        Err(GameError::NotFound { unit: twin.id() })
    );
}

#[test]
fn test_set_replaces_and_returns_displaced() {
    let mut roster = roster(vec![named("A", 1, 1), named("B", 1, 1)]);
    let removed = roster.set(0, Some(named("C", 1, 1))).unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].name(), "A");
    assert_eq!(names(&roster), vec!["C", "B"]);
}

#[test]
fn test_set_none_repacks() {
    let mut roster = roster(vec![named("A", 1, 1), named("B", 1, 1), named("C", 1, 1)]);
    roster.set(1, None).unwrap();
    assert_eq!(names(&roster), vec!["A", "C"]);
    assert!(roster.get(2).unwrap().is_none());
}

#[test]
fn test_set_fainted_unit_is_pruned() {
    let mut roster = roster(vec![named("A", 1, 1)]);
    let removed = roster.set(-1, Some(named("Dead", 1, 0))).unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].name(), "Dead");
    assert_eq!(names(&roster), vec!["A"]);
}

#[test]
fn test_set_out_of_bounds() {
    let mut roster = Roster::empty();
    assert!(matches!(
        roster.set(7, Some(grunt(1, 1))),
        Err(GameError::OutOfBounds { index: 7, .. })
    ));
}

#[test]
fn test_set_unit_by_identity() {
    let b = named("B", 1, 1);
    let b_id = b.id();
    let mut roster = roster(vec![named("A", 1, 1), b]);

    roster.set_unit(b_id, None).unwrap();
    assert_eq!(names(&roster), vec!["A"]);
    assert!(matches!(
        roster.set_unit(b_id, None),
        Err(GameError::NotFound { .. })
    ));
}

#[test]
fn test_units_follow_roster_side() {
    let state = GameState::combat(roster(vec![grunt(1, 1)]), roster(vec![grunt(1, 1)]));
    assert_eq!(state.player().side(), Some(Side::Player));
    assert!(state.player().iter().all(|u| u.side() == Some(Side::Player)));
    let opponent = state.opponent().unwrap();
    assert!(opponent.iter().all(|u| u.side() == Some(Side::Opponent)));
}

#[test]
fn test_random_subset_is_distinct_and_clamped() {
    let roster = roster(vec![grunt(1, 1), grunt(1, 1), grunt(1, 1)]);
    let mut rng = XorShiftRng::seed_from_u64(7);

    for n in 0..=3 {
        let picked = roster.random_subset(n, &mut rng);
        assert_eq!(picked.len(), n);
        let mut deduped = picked.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), n);
        assert!(picked.iter().all(|id| roster.contains(*id)));
    }

    let picked = roster.random_subset(10, &mut rng);
    assert_eq!(picked.len(), 3);
}

#[test]
fn test_random_subset_of_empty_roster() {
    let mut rng = XorShiftRng::seed_from_u64(7);
    assert!(Roster::empty().random_subset(2, &mut rng).is_empty());
}

#[test]
fn test_random_subset_is_seeded() {
    let roster = roster((0..5).map(|_| grunt(1, 1)).collect());
    let mut a = XorShiftRng::seed_from_u64(99);
    let mut b = XorShiftRng::seed_from_u64(99);
    for _ in 0..20 {
        assert_eq!(roster.random_subset(2, &mut a), roster.random_subset(2, &mut b));
    }
}

#[test]
fn test_display() {
    let roster = roster(vec![named("Fish", 2, 3), named("Ant", 2, 1)]);
    assert_eq!(format!("{}", roster), "[ Fish:2/3 Ant:2/1 _____ _____ _____ ]");
    assert_eq!(
        format!("{}", Roster::empty()),
        "[ _____ _____ _____ _____ _____ ]"
    );
}
