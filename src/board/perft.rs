use super::GameState;

impl GameState {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Used to cross-check move generation against published node counts.
    /// The state is restored before returning.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
