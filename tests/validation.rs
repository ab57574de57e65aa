// tests/validation.rs
use robot_room::{Placement, Room, ValidationError, validate};

fn check(room: Room, placement: Placement, instructions: &str) -> Result<(), ValidationError> {
    validate(room, &placement, instructions).map(|_| ())
}

#[test]
fn test_zero_width_room_wins_over_everything() {
    let err = check(Room::new(0, 5), Placement::new(-1, 99, "Q"), "").unwrap_err();
    assert_eq!(err, ValidationError::InvalidRoomWidth(0));
}

#[test]
fn test_zero_depth_room() {
    let err = check(Room::new(5, 0), Placement::new(0, 0, "N"), "F").unwrap_err();
    assert_eq!(err, ValidationError::InvalidRoomDepth(0));
}

#[test]
fn test_check_order_is_room_robot_instructions() {
    let room = Room::new(5, 5);

    assert_eq!(
        check(room, Placement::new(-1, -1, "Q"), "").unwrap_err(),
        ValidationError::InvalidRobotColumn(-1)
    );
    assert_eq!(
        check(room, Placement::new(5, -1, "Q"), "").unwrap_err(),
        ValidationError::RobotColumnOutOfBounds {
            column: 5,
            width: 5
        }
    );
    assert_eq!(
        check(room, Placement::new(4, -1, "Q"), "").unwrap_err(),
        ValidationError::InvalidRobotRow(-1)
    );
    assert_eq!(
        check(room, Placement::new(4, 5, "Q"), "").unwrap_err(),
        ValidationError::RobotRowOutOfBounds { row: 5, depth: 5 }
    );
    assert_eq!(
        check(room, Placement::new(4, 4, "Q"), "").unwrap_err(),
        ValidationError::InvalidOrientation("Q".to_string())
    );
    assert_eq!(
        check(room, Placement::new(4, 4, "N"), "").unwrap_err(),
        ValidationError::EmptyInstructions
    );
    assert_eq!(
        check(room, Placement::new(4, 4, "N"), "FXF").unwrap_err(),
        ValidationError::InvalidInstructionCharacters('X')
    );
    assert!(check(room, Placement::new(4, 4, "N"), "FLR").is_ok());
}

#[test]
fn test_orientation_is_case_sensitive() {
    let err = check(Room::new(2, 2), Placement::new(0, 0, "n"), "F").unwrap_err();
    assert_eq!(err, ValidationError::InvalidOrientation("n".to_string()));
}

#[test]
fn test_whitespace_in_instructions_is_rejected() {
    let err = check(Room::new(2, 2), Placement::new(0, 0, "E"), "F F").unwrap_err();
    assert_eq!(err, ValidationError::InvalidInstructionCharacters(' '));
}

#[test]
fn test_messages_name_the_offending_values() {
    let room = Room::new(5, 5);

    let msg = check(room, Placement::new(0, 0, "X"), "F")
        .unwrap_err()
        .to_string();
    assert!(msg.contains("(X)"), "{msg}");
    assert!(msg.contains("N,E,S,W"), "{msg}");

    let msg = check(room, Placement::new(7, 0, "N"), "F")
        .unwrap_err()
        .to_string();
    assert_eq!(
        msg,
        "Robot start width position (7) cannot be equal or larger than room width (5)"
    );

    let msg = check(room, Placement::new(0, 0, "N"), "")
        .unwrap_err()
        .to_string();
    assert_eq!(msg, "Instructions cannot be empty");
}

#[test]
fn test_valid_request_exposes_parsed_parts() {
    let request = validate(Room::new(5, 5), &Placement::new(1, 2, "W"), "rlF").unwrap();
    assert_eq!(*request.room(), Room::new(5, 5));
    assert_eq!(request.start_pose().column(), 1);
    assert_eq!(request.start_pose().row(), 2);
    assert_eq!(request.instructions().len(), 3);
}
