use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use chess_core::board::Board;
use chess_core::uci::try_parse_position_command;

fn spawn_engine() -> Child {
    Command::new(env!("CARGO_BIN_EXE_chess_core"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary")
}

/// Read lines until one starts with `prefix`, returning everything read.
fn read_until(reader: &mut BufReader<ChildStdout>, prefix: &str) -> (String, Option<String>) {
    let mut output = String::new();
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            return (output, None);
        }
        output.push_str(&line);
        if line.starts_with(prefix) {
            return (output, Some(line));
        }
    }
}

fn quit(mut stdin: ChildStdin, mut child: Child) {
    stdin.write_all(b"quit\n").unwrap();
    let status = child.wait().expect("engine did not exit");
    assert!(status.success());
}

fn assert_legal_bestmove(line: &str, position: &[&str]) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    assert!(parts.len() >= 2, "bestmove missing move: {line}");
    let mv = parts[1];
    assert_ne!(mv, "0000", "engine returned null move");

    let board: Board = try_parse_position_command(position).unwrap();
    assert!(board.parse_move(mv).is_ok(), "bestmove not legal in position: {mv}");
}

#[test]
fn uci_smoke_test_returns_legal_move() {
    let mut child = spawn_engine();
    let mut stdin = child.stdin.take().unwrap();
    let mut reader = BufReader::new(child.stdout.take().unwrap());

    stdin
        .write_all(b"uci\nisready\nposition startpos moves e2e4\ngo movetime 50\n")
        .unwrap();
    let (output, bestmove) = read_until(&mut reader, "bestmove");
    quit(stdin, child);

    assert!(output.contains("id name chess_core"));
    assert!(output.contains("uciok"));
    assert!(output.contains("readyok"));
    assert!(output.contains("hashfull"));
    assert_legal_bestmove(&bestmove.expect("no bestmove found"), &["startpos", "moves", "e2e4"]);
}

#[test]
fn uci_go_depth_returns_legal_move() {
    let mut child = spawn_engine();
    let mut stdin = child.stdin.take().unwrap();
    let mut reader = BufReader::new(child.stdout.take().unwrap());

    stdin
        .write_all(b"ucinewgame\nposition startpos moves e2e4 e7e5 g1f3\ngo depth 3\n")
        .unwrap();
    let (output, bestmove) = read_until(&mut reader, "bestmove");
    quit(stdin, child);

    assert!(output.contains("info depth 3"));
    assert_legal_bestmove(
        &bestmove.expect("no bestmove found"),
        &["startpos", "moves", "e2e4", "e7e5", "g1f3"],
    );
}

#[test]
fn uci_go_with_clock() {
    let mut child = spawn_engine();
    let mut stdin = child.stdin.take().unwrap();
    let mut reader = BufReader::new(child.stdout.take().unwrap());

    stdin
        .write_all(b"position startpos\ngo wtime 3000 btime 3000 winc 0 binc 0\n")
        .unwrap();
    let (_, bestmove) = read_until(&mut reader, "bestmove");
    quit(stdin, child);

    assert_legal_bestmove(&bestmove.expect("no bestmove found"), &["startpos"]);
}

#[test]
fn uci_reports_options_and_handles_setoption() {
    let mut child = spawn_engine();
    let input = b"uci\nsetoption name Hash value 8\nsetoption name Difficulty value Easy\nsetoption name Clear Hash\nsetoption name Bogus value 1\nisready\nquit\n";
    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("option name Hash type spin"));
    assert!(stdout.contains("option name Difficulty type combo"));
    assert!(stdout.contains("var Grandmaster"));
    assert!(stdout.contains("option name Clear Hash type button"));
    assert_eq!(stdout.matches("info string error").count(), 1);
    assert!(stdout.contains("readyok"));
}

#[test]
fn uci_bad_position_keeps_previous_board() {
    let mut child = spawn_engine();
    let input = b"position startpos moves e2e4\nposition startpos moves e2e4 e2e4\nd\nquit\n";
    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("info string error: Invalid move 'e2e4'"));
    assert!(stdout.contains("Fen: rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"));
}

#[test]
fn uci_perft_command_outputs_nodes() {
    let mut child = spawn_engine();
    let mut stdin = child.stdin.take().unwrap();
    let mut reader = BufReader::new(child.stdout.take().unwrap());

    stdin.write_all(b"position startpos\nperft 2\n").unwrap();
    let (output, total) = read_until(&mut reader, "Nodes searched");
    quit(stdin, child);

    assert!(output.contains("e2e4: 20"));
    assert_eq!(total.as_deref().map(str::trim), Some("Nodes searched: 400"));
}
