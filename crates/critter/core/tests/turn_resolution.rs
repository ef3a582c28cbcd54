use critter_core::{
    Action, Behavior, BouncingCritter, Critter, Direction, Legend, OccupantKind, PcgRng,
    SequenceRng, Vector, View, WallFollower, World,
};

const VALLEY: [&str; 6] = [
    "##########",
    "#  o     #",
    "#   ##   #",
    "# ~  # o #",
    "#        #",
    "##########",
];

fn bouncer(facing: Direction) -> Behavior {
    Behavior::Bouncing(BouncingCritter::new(facing))
}

#[test]
fn fresh_world_round_trips_its_map() {
    let world = World::new(&VALLEY, Legend::standard(), PcgRng::new(11)).unwrap();
    assert_eq!(world.render(), VALLEY.join("\n"));
}

#[test]
fn unobstructed_turn_keeps_every_actable_occupant() {
    // Four critters in an open field, each with room to move anywhere.
    let mut world = World::new(&["       "; 7], Legend::standard(), SequenceRng::default()).unwrap();
    let ids = [
        world.place(Vector::new(1, 1), 'o', bouncer(Direction::East)).unwrap(),
        world.place(Vector::new(5, 1), 'o', bouncer(Direction::South)).unwrap(),
        world
            .place(Vector::new(1, 5), '~', Behavior::WallFollower(WallFollower::new()))
            .unwrap(),
        world.place(Vector::new(5, 5), 'o', bouncer(Direction::NorthWest)).unwrap(),
    ];

    let report = world.turn();
    assert_eq!(report.acted, 4);
    assert_eq!(report.moved, 4);
    assert_eq!(world.occupant_count(), 4);
    assert_eq!(world.actable_count(), 4);
    for id in ids {
        assert!(world.position_of(id).is_some());
    }
    assert_eq!(world.position_of(ids[0]), Some(Vector::new(2, 1)));
    assert_eq!(world.position_of(ids[1]), Some(Vector::new(5, 2)));
    assert_eq!(world.position_of(ids[2]), Some(Vector::new(1, 6)));
    assert_eq!(world.position_of(ids[3]), Some(Vector::new(4, 4)));
}

#[test]
fn occupant_count_is_stable_over_many_turns() {
    let mut world = World::new(&VALLEY, Legend::standard(), PcgRng::new(2024)).unwrap();
    let occupants = world.occupant_count();
    let actable = world.actable_count();
    for _ in 0..200 {
        let report = world.turn();
        assert_eq!(report.acted, actable);
        assert_eq!(report.moved + report.rejected + report.idle, actable);
    }
    assert_eq!(world.occupant_count(), occupants);
    assert_eq!(world.actable_count(), actable);
    assert_eq!(world.turns(), 200);
}

#[test]
fn conflict_goes_to_first_in_scan_order() {
    // Two critters on either side of one free cell, both facing it.
    let mut world = World::new(&["#   #"], Legend::standard(), SequenceRng::default()).unwrap();
    let first = world.place(Vector::new(1, 0), 'o', bouncer(Direction::East)).unwrap();
    let second = world.place(Vector::new(3, 0), 'o', bouncer(Direction::West)).unwrap();

    world.turn();

    assert_eq!(world.position_of(first), Some(Vector::new(2, 0)));
    assert_eq!(world.position_of(second), Some(Vector::new(3, 0)));
    assert_eq!(world.render(), "# oo#");
}

#[test]
fn corner_bouncer_faces_the_only_free_cell() {
    // Top-left corner: the edge and a wall block everything except south.
    let mut world = World::new(&[" #", "  "], Legend::standard(), SequenceRng::new(&[5])).unwrap();
    let id = world.place(Vector::new(0, 0), 'o', bouncer(Direction::North)).unwrap();
    world.place(Vector::new(1, 1), '#', Behavior::Wall).unwrap();

    world.turn();

    let critter = world.occupant(id).unwrap();
    assert_eq!(critter.facing(), Some(Direction::South));
    assert_eq!(world.position_of(id), Some(Vector::new(0, 1)));
}

#[test]
fn enclosed_wall_follower_terminates() {
    let world = World::new(&["###", "# #", "###"], Legend::standard(), PcgRng::new(0)).unwrap();
    let mut follower = WallFollower::with_facing(Direction::North);
    let view = View::new(world.grid(), Vector::new(1, 1));

    // Look-back from n is sw, a wall, so the scan starts at w and wraps to it.
    let action = follower.decide(&view, &mut SequenceRng::default());
    assert_eq!(action, Some(Action::Move(Direction::West)));
    assert_eq!(follower.facing(), Direction::West);
}

#[test]
fn boxed_in_bouncer_stays_and_faces_south() {
    let mut world =
        World::new(&["###", "# #", "###"], Legend::standard(), SequenceRng::default()).unwrap();
    let id = world.place(Vector::new(1, 1), 'o', bouncer(Direction::North)).unwrap();

    let report = world.turn();

    assert_eq!(report.rejected, 1);
    assert_eq!(world.position_of(id), Some(Vector::new(1, 1)));
    assert_eq!(
        world.occupant(id).and_then(|occupant| occupant.facing()),
        Some(Direction::South)
    );
    assert_eq!(world.render(), "###\n#o#\n###");
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed| {
        let mut world = World::new(&VALLEY, Legend::standard(), PcgRng::new(seed)).unwrap();
        (0..50)
            .map(|_| {
                world.turn();
                world.render()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn custom_legend_characters_render_back() {
    let legend = Legend::new()
        .with('X', OccupantKind::Wall)
        .and_then(|legend| legend.with('b', OccupantKind::BouncingCritter))
        .unwrap();
    let rows = ["XXXX", "Xb X", "XXXX"];
    let mut world = World::new(&rows, legend, PcgRng::new(5)).unwrap();
    assert_eq!(world.render(), rows.join("\n"));

    world.turn();
    let rendered = world.render();
    assert_eq!(rendered.matches('b').count(), 1);
    assert_eq!(rendered.matches('X').count(), 10);
}
