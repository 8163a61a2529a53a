use knights_tour::engine::{Session, SessionState};
use knights_tour::solver::solve;
use knights_tour::utils::{parse_dimensions, parse_square};
use std::io::{self, Write};

fn main() {
    println!("Welcome to the Knight's Tour!");

    let (height, width) = read_dimensions();
    let start = read_start(height, width);

    // Solve up front so we know whether a tour exists before offering the
    // puzzle or printing the answer.
    let solution = solve(start, height, width);

    if wants_to_try() && solution.is_some() {
        play(start, height, width);
    } else if let Some(tour) = solution {
        println!("Here's the solution!");
        println!("{}", tour);
    } else {
        println!("No solution exists!");
    }
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().expect("failed to flush stdout");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("failed to read input");
    input.trim().to_string()
}

fn read_dimensions() -> (usize, usize) {
    loop {
        match parse_dimensions(&prompt("Enter your board dimensions: ")) {
            Ok(dimensions) => return dimensions,
            Err(_) => println!("Invalid dimensions!"),
        }
    }
}

fn read_start(height: usize, width: usize) -> (usize, usize) {
    loop {
        match parse_square(
            &prompt("Enter the knight's starting position: "),
            height,
            width,
        ) {
            Ok(square) => return square,
            Err(_) => println!("Invalid position!"),
        }
    }
}

fn wants_to_try() -> bool {
    loop {
        match prompt("Do you want to try the puzzle? (y/n): ").as_str() {
            "y" => return true,
            "n" => return false,
            _ => println!("Invalid input!"),
        }
    }
}

fn play(start: (usize, usize), height: usize, width: usize) {
    let mut session = Session::new(start, height, width);

    loop {
        // Each candidate square is drawn as the number of onward moves it
        // would keep open, so the player can judge dead ends.
        let hints = session.possible_moves();
        println!("{}", session.board().to_string_with_hints(&hints));

        match session.state() {
            SessionState::Completed => {
                println!("What a great tour! Congratulations!");
                break;
            }
            SessionState::Stuck => {
                println!("No more possible moves!");
                println!("Your knight visited {} squares!", session.visited_count());
                break;
            }
            SessionState::InProgress => {}
        }

        apply_next_move(&mut session, height, width);
    }
}

fn apply_next_move(session: &mut Session, height: usize, width: usize) {
    loop {
        let input = prompt("Enter your next move: ");
        let square = match parse_square(&input, height, width) {
            Ok(square) => square,
            Err(_) => {
                print!("Invalid move! ");
                continue;
            }
        };
        match session.apply_move(square) {
            Ok(_) => return,
            Err(_) => print!("Invalid move! "),
        }
    }
}
