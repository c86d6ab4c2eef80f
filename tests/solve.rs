use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn solve_output_right_route() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("mazes/sample.txt");

    cmd.assert()
        .success()
        .stdout(str::contains(
            "Found a route of 20 step(s) from (3, 0) to (10, 13).",
        ))
        .stdout(str::contains("(9, 12)\n(10, 12)\n(10, 13)\n"));
}

#[test]
fn solve_output_raw_walk_and_drawing() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["mazes/dead_end.txt", "--raw", "--render"]);

    cmd.assert()
        .success()
        .stdout(str::contains(
            "The walker took 10 step(s), going back over some of them:",
        ))
        .stdout(str::contains("Found a route of 6 step(s) from (0, 1) to (3, 4)."))
        .stdout(str::contains("XXXXX\nI...X\nX X.X\nX X.X\nXXXOX\n"));
}

#[test]
fn solve_reports_stuck_walker() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["mazes/walled_in.txt", "--skip-validation"]);

    cmd.assert()
        .success()
        .stderr(str::contains("the walker got stuck at (1, 0)"));
}

#[test]
fn solve_reports_walker_back_at_entrance() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["mazes/no_exit.txt", "--skip-validation"]);

    cmd.assert()
        .success()
        .stderr(str::contains("the walker ended on the entrance at (1, 0)"));
}

#[test]
fn solve_rejects_invalid_maze_before_walking() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("mazes/walled_in.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("The entrance at (1, 0) has no passable neighbor."))
        .stderr(str::contains("the walker").not());
}

#[test]
fn solve_rejects_ragged_maze() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("mazes/ragged.txt");

    cmd.assert().failure().stderr(str::contains(
        "Expect 5 column(s) in each row, given 1 in row 4.",
    ));
}

#[test]
fn solve_fails_on_step_limit() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["mazes/sample.txt", "--max-steps", "10"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("Walker didn't finish within 10 steps"));
}

#[test]
fn solve_traces_steps_when_verbose() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.env_remove("MAZE_LOG")
        .args(["mazes/dead_end.txt", "-vv"]);

    cmd.assert()
        .success()
        .stderr(str::contains("Move from (0, 1) to (1, 1)."))
        .stderr(str::contains("Walker reached exit at (3, 4) after 10 step(s)."));
}
