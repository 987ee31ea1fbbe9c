use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use connect_four_engine::board::{Board, Position};
use connect_four_engine::protocol::try_parse_position_command;

fn run_engine(input: &[u8]) -> String {
    let exe = env!("CARGO_BIN_EXE_connect_four_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn engine binary");

    child.stdin.as_mut().unwrap().write_all(input).unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn protocol_smoke_test_returns_legal_move() {
    let exe = env!("CARGO_BIN_EXE_connect_four_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn engine binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin
        .write_all(b"c4\nisready\nposition empty moves d d\ngo ply 4\n")
        .unwrap();

    let mut output = String::new();
    let mut bestmove_line = None;
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        output.push_str(&line);
        if line.starts_with("bestmove") {
            bestmove_line = Some(line);
            break;
        }
    }

    stdin.write_all(b"quit\n").unwrap();
    let _ = child.wait();

    assert!(output.contains("c4ok"));
    assert!(output.contains("readyok"));
    assert!(output.contains("info ply 4 "));

    let bestmove = bestmove_line.expect("no bestmove found");
    let parts: Vec<&str> = bestmove.split_whitespace().collect();
    assert_eq!(parts.len(), 2, "bestmove missing move: {bestmove}");
    let mv: Position = parts[1].parse().expect("bestmove is a cell");

    let board = try_parse_position_command(&["position", "empty", "moves", "d", "d"]).unwrap();
    assert!(board.legal_moves().contains(&mv), "bestmove not legal: {mv}");
}

#[test]
fn reports_options_and_handles_setoption() {
    let stdout = run_engine(
        b"c4\nsetoption name Ply value 2\nsetoption name PersistentCache value true\nisready\nquit\n",
    );

    assert!(stdout.contains("id name connect_four_engine"));
    assert!(stdout.contains("option name Ply type spin default 7"));
    assert!(stdout.contains("option name PersistentCache type check default false"));
    assert!(stdout.contains("readyok"));
}

#[test]
fn full_board_reports_no_move() {
    let stdout = run_engine(
        b"position grid xxoxxoo/ooxooxx/xxoxxoo/ooxooxx/xxoxxoo/ooxooxx\ngo\nquit\n",
    );
    assert_eq!(stdout.trim(), "bestmove (none)");
}

#[test]
fn bad_position_is_reported_and_ignored() {
    let stdout = run_engine(b"position grid x/o\nposition empty moves z\nd\nquit\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{stdout}");
    assert!(lines[0].starts_with("info string error"));
    assert!(lines[1].starts_with("info string error"));
    assert_eq!(lines[2], Board::new().to_notation());
}

#[test]
fn go_for_explicit_piece() {
    let stdout = run_engine(
        b"position grid ......./......./......./......x/......x/oo....x\ngo ply 2 piece o\nquit\n",
    );
    assert!(stdout.lines().any(|line| line == "bestmove g4"), "{stdout}");
}
