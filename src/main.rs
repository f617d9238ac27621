mod controller;
mod game;
mod utils;

use clap::{Arg, ArgAction, Command};
use strum::IntoEnumIterator;

use crate::controller::GameController;
use crate::game::{BoardSquare, Color};
use crate::utils::GUICommand;

fn main() {
    env_logger::init();

    let matches = Command::new("patzer")
        .version(concat!(
            env!("CARGO_PKG_VERSION"),
            " (",
            env!("GIT_HASH"),
            ")"
        ))
        .about("Interactive chess rules engine")
        .arg(
            Arg::new("fen")
                .long("fen")
                .value_name("FEN")
                .help("Initial position (defaults to the standard start)"),
        )
        .arg(
            Arg::new("checkless")
                .long("checkless")
                .action(ArgAction::SetTrue)
                .help("Disable check and checkmate enforcement"),
        )
        .get_matches();

    let fen = matches.get_one::<String>("fen").map(|s| s.as_str());
    let checkless = matches.get_flag("checkless");

    let mut controller = match GameController::new(fen, checkless) {
        Ok(controller) => controller,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    controller.print();

    loop {
        match GUICommand::receive() {
            GUICommand::Quit => break,
            GUICommand::NewGame => match controller.new_game() {
                Ok(()) => controller.print(),
                Err(error) => log::info!("{}", error),
            },
            GUICommand::FenPosition(fen) => match controller.new_game_from_fen(fen.as_str()) {
                Ok(()) => controller.print(),
                Err(error) => log::info!("{}", error),
            },
            GUICommand::Move(from, to) => {
                match controller.try_move_piece(from.as_str(), to.as_str()) {
                    Ok(()) => controller.print(),
                    Err(error) => log::info!("{}", error),
                }
            }
            GUICommand::LegalMoves(square) => match controller.legal_squares(square.as_str()) {
                Ok(squares) => controller.print_with_moves(squares.iter().collect()),
                Err(error) => log::info!("{}", error),
            },
            GUICommand::Piece(square) => match BoardSquare::parse(square.as_str()) {
                Ok(square) => match controller.game.piece_at(square) {
                    (kind, Some(color)) => println!("{:?} {:?}", color, kind),
                    (_, None) => println!("empty"),
                },
                Err(error) => log::info!("{}", error),
            },
            GUICommand::Attacked(square) => {
                match BoardSquare::parse(square.as_str())
                    .and_then(|square| controller.game.is_piece_under_attack(square))
                {
                    Ok(attacked) => println!("{}", attacked),
                    Err(error) => log::info!("{}", error),
                }
            }
            GUICommand::Kings => {
                for color in Color::iter() {
                    match controller.game.king_square(color) {
                        Ok(square) => println!("{:?}: {}", color, square.unparse()),
                        Err(error) => log::info!("{}", error),
                    }
                }
            }
            GUICommand::Count => println!("{}", controller.game.piece_count()),
            GUICommand::Show => controller.print(),
            GUICommand::Fen => controller.print_fen(),
            GUICommand::Check => match controller.game.is_check() {
                Ok(check) => println!("{}", check),
                Err(error) => log::info!("{}", error),
            },
            GUICommand::Checkmate => match controller.game.is_checkmate() {
                Ok(checkmate) => println!("{}", checkmate),
                Err(error) => log::info!("{}", error),
            },
            GUICommand::Invalid(input) => log::info!("invalid command: {}", input.trim()),
        }
    }
}
