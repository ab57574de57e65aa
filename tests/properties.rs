// tests/properties.rs
use proptest::prelude::*;
use robot_room::{
    Instruction, Orientation, Placement, Pose, Room, ValidationError, simulate, step, validate,
};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

/// A usable room together with an in-bounds start pose.
fn room_and_pose() -> impl Strategy<Value = (Room, Pose)> {
    (1i64..40, 1i64..40).prop_flat_map(|(width, depth)| {
        (0..width, 0..depth, orientation()).prop_map(move |(column, row, o)| {
            (Room::new(width, depth), Pose::new(column, row, o))
        })
    })
}

fn instruction_text() -> impl Strategy<Value = String> {
    "[fFlLrR]{1,64}"
}

proptest! {
    #[test]
    fn in_bounds_requests_validate((room, pose) in room_and_pose(), text in instruction_text()) {
        let request = validate(room, &Placement::from(pose), &text);
        prop_assert!(request.is_ok());
        prop_assert_eq!(*request.unwrap().start_pose(), pose);
    }

    #[test]
    fn empty_room_axis_fails_first(
        zero_width in any::<bool>(),
        other in 0i64..5,
        column in -5i64..5,
        row in -5i64..5,
        o in "[A-Z]?",
        text in ".{0,8}",
    ) {
        let room = if zero_width { Room::new(0, other) } else { Room::new(other, 0) };
        let err = validate(room, &Placement::new(column, row, o), &text).unwrap_err();
        if room.width == 0 {
            prop_assert_eq!(err, ValidationError::InvalidRoomWidth(0));
        } else {
            prop_assert_eq!(err, ValidationError::InvalidRoomDepth(0));
        }
    }

    #[test]
    fn four_turns_are_identity((room, pose) in room_and_pose()) {
        for turn in [Instruction::RotateLeft, Instruction::RotateRight] {
            let mut p = pose;
            for _ in 0..4 {
                step(&mut p, turn, &room);
            }
            prop_assert_eq!(p, pose);
        }
    }

    #[test]
    fn left_and_right_are_inverses((room, pose) in room_and_pose()) {
        let mut p = pose;
        step(&mut p, Instruction::RotateLeft, &room);
        step(&mut p, Instruction::RotateRight, &room);
        prop_assert_eq!(p, pose);

        step(&mut p, Instruction::RotateRight, &room);
        step(&mut p, Instruction::RotateLeft, &room);
        prop_assert_eq!(p, pose);
    }

    #[test]
    fn forward_moves_one_cell_or_nothing((room, pose) in room_and_pose()) {
        let mut p = pose;
        let moved = step(&mut p, Instruction::Forward, &room);
        prop_assert_eq!(p.orientation, pose.orientation);

        if moved {
            prop_assert_eq!(p.position - pose.position, pose.orientation.step());
            let delta = (p.column() - pose.column()).abs() + (p.row() - pose.row()).abs();
            prop_assert_eq!(delta, 1);
        } else {
            prop_assert!(!room.contains(pose.ahead()));
            prop_assert_eq!(p, pose);
        }
    }

    #[test]
    fn robot_never_leaves_the_room((room, pose) in room_and_pose(), text in instruction_text()) {
        let request = validate(room, &Placement::from(pose), &text).unwrap();
        let result = simulate(&request);
        prop_assert!(room.contains(result.final_pose.position));
    }

    #[test]
    fn parsing_ignores_case((room, pose) in room_and_pose(), text in instruction_text()) {
        let placement = Placement::from(pose);
        let upper = validate(room, &placement, &text.to_uppercase()).unwrap();
        let lower = validate(room, &placement, &text.to_lowercase()).unwrap();
        prop_assert_eq!(upper.instructions(), lower.instructions());
        prop_assert_eq!(simulate(&upper), simulate(&lower));
    }
}
