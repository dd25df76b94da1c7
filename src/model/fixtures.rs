// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::board::{Action, Board, Direction, Note};

pub(crate) const TWO_PARTICIPANTS_ONE_ACTION: &str = "participant A\nparticipant B\nA->B: hi";

pub(crate) const BACKWARD_ACTION: &str = "participant A\nparticipant B\nB<-A: ping";

pub(crate) const GREETING_ROUND: &str = "participant Alice
participant Bob
participant Charlie

Alice->Bob: Hello Bob

note over Bob: Bob got the message

Bob->Charlie: Hello Charlie

note over Charlie: Charlie got the message

Charlie->Alice: Hello Alice";

pub(crate) const LONG_NOTE: &str = "participant A
note over A: a very long note text that exceeds the maximum wrap width of thirty characters and must be split";

pub(crate) const SHORT_NOTE: &str = "participant A
note over A: short";

/// Events are pushed out of line order and across owners so merge code has work to do.
pub(crate) fn board_interleaved_owners() -> Board {
    let mut board = Board::new();

    let alice = board.declare("Alice").expect("declare");
    alice.push_event(Action::new(7, Direction::Forward, "Bob", "third"));
    alice.push_event(Action::new(3, Direction::Forward, "Bob", "first"));

    let bob = board.declare("Bob").expect("declare");
    bob.push_event(Note::new(5, "Bob", "second"));
    bob.push_event(Action::new(9, Direction::Backward, "Alice", "fourth"));

    board.sort_events();
    board
}
