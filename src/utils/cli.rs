use std::io;

pub(crate) enum GUICommand {
    NewGame,                  // position startpos
    FenPosition(String),      // position fen <fen>
    Move(String, String),     // move <from> <to>
    LegalMoves(String),       // moves <square>
    Piece(String),            // piece <square> - what stands there?
    Attacked(String),         // attacked <square> - is that piece under attack?
    Kings,                    // kings - locate both kings
    Count,                    // count - number of pieces on the board
    Show,                     // show - print the board
    Fen,                      // fen - print the current FEN
    Check,                    // check - is the side to move in check?
    Checkmate,                // mate - is the side to move checkmated?
    Quit,                     // quit the program

    Invalid(String), // placeholder for invalid commands so we can pattern match
}

impl GUICommand {
    pub fn receive() -> GUICommand {
        let mut input = String::new();

        io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");

        let parts = input.as_str().trim().split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["position", "startpos"] => GUICommand::NewGame,
            ["position", "fen", fen @ ..] if !fen.is_empty() => {
                GUICommand::FenPosition(fen.join(" "))
            }
            ["move", from, to] => GUICommand::Move(from.to_string(), to.to_string()),
            ["moves", square] => GUICommand::LegalMoves(square.to_string()),
            ["piece", square] => GUICommand::Piece(square.to_string()),
            ["attacked", square] => GUICommand::Attacked(square.to_string()),
            ["kings"] => GUICommand::Kings,
            ["count"] => GUICommand::Count,
            ["show"] => GUICommand::Show,
            ["fen"] => GUICommand::Fen,
            ["check"] => GUICommand::Check,
            ["mate"] => GUICommand::Checkmate,
            ["quit"] => GUICommand::Quit,
            _ => GUICommand::Invalid(input),
        }
    }
}
