use std::env;
use std::process;

use mailbox_chess::board::GameState;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut state = GameState::new();
    for (ply, mv) in args.iter().skip(1).enumerate() {
        if let Err(err) = state.play_uci(mv) {
            eprintln!("ply {}: {}", ply + 1, err);
            process::exit(1);
        }
    }

    let legal_moves = state.legal_moves();
    println!(
        "side_to_move: {}",
        if state.white_to_move() { "white" } else { "black" }
    );
    println!("in_check: {}", state.is_in_check());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", state.is_checkmate());
    println!("stalemate: {}", state.is_stalemate());
    println!("fen: {}", state.to_fen());
    for mv in &legal_moves {
        println!("{mv}");
    }
}
