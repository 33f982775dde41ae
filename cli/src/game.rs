use tictactoe_engine::{Board, Difficulty, GameOutcome, GameRng, Mark, calculate_move, log};

use crate::config::{FirstPlayerSetting, GameConfig};
use crate::input::{clear_screen, input, joiner, prompt, read_line, yes};
use crate::render::render_board;

const MAX_SIDE_FOR_IMPOSSIBLE: usize = 3;

struct Player {
    name: String,
    mark: Mark,
    score: u32,
}

impl Player {
    fn new(name: String, mark: Mark) -> Self {
        Self {
            name,
            mark,
            score: 0,
        }
    }

    fn add_point(&mut self) {
        self.score += 1;
    }

    fn reset_score(&mut self) {
        self.score = 0;
    }
}

pub struct Game {
    board: Board,
    human: Player,
    computer: Player,
    difficulty: Difficulty,
    first_mark: Mark,
    current_mark: Mark,
    winning_score: u32,
    rng: GameRng,
}

impl Game {
    pub fn new(config: &GameConfig, mut rng: GameRng) -> Result<Game, String> {
        let board = Board::new(config.side_length).map_err(|e| e.to_string())?;

        let name = prompt_name();
        let human_mark = prompt_marker();
        let computer_mark = human_mark
            .opponent()
            .ok_or_else(|| "Human mark must not be empty".to_string())?;

        let human = Player::new(name, human_mark);
        let computer = Player::new("Computer".to_string(), computer_mark);

        let first_mark = decide_first_mark(config.first_player, &human, &computer, &mut rng);
        let difficulty = decide_difficulty(config, board.side_length());

        log!(
            "Session started: side length {}, difficulty {}, seed {}",
            board.side_length(),
            difficulty,
            rng.seed()
        );

        let mut game = Game {
            board,
            human,
            computer,
            difficulty,
            first_mark,
            current_mark: first_mark,
            winning_score: config.winning_score,
            rng,
        };
        game.reset_round();
        prompt(&format!("Hi, {}! Welcome to Tic Tac Toe!", game.human.name));
        println!();
        Ok(game)
    }

    pub fn play(&mut self) {
        loop {
            self.display_board();
            self.play_round();
            self.display_result();
            self.update_scores();
            self.display_scores();

            if self.game_winner().is_some() {
                self.display_game_winner();
                if self.restart() {
                    continue;
                }
                break;
            }

            if !yes(&input(
                "Would you like to play again? (y/n)",
                &["y", "n", "yes", "no"],
            )) {
                break;
            }

            self.reset_round();
            prompt("Let's play again!");
            println!();
        }

        prompt("Thanks for playing Tic Tac Toe! Goodbye!");
    }

    fn play_round(&mut self) {
        loop {
            self.current_player_moves();
            if self.board.outcome() != GameOutcome::InProgress {
                break;
            }
            self.clear_screen_and_display_board();
        }
    }

    fn current_player_moves(&mut self) {
        if self.current_mark == self.human.mark {
            self.human_moves();
            self.current_mark = self.computer.mark;
        } else {
            self.computer_moves();
            self.current_mark = self.human.mark;
        }
    }

    fn human_moves(&mut self) {
        loop {
            let options: Vec<String> = self
                .board
                .available_moves()
                .iter()
                .map(ToString::to_string)
                .collect();
            let answer = input(
                &format!("Choose a square ({}):", joiner(&options, ", ", "or")),
                &options,
            );
            let position: usize = match answer.parse() {
                Ok(position) => position,
                Err(_) => continue,
            };
            match self.board.place(position, self.human.mark) {
                Ok(()) => return,
                Err(err) => prompt(&err.to_string()),
            }
        }
    }

    fn computer_moves(&mut self) {
        if self.difficulty == Difficulty::Impossible {
            println!("Computer is thinking...");
        }

        let own = self.computer.mark;
        let opponent = self.human.mark;
        if let Some(position) =
            calculate_move(self.difficulty, &self.board, own, opponent, &mut self.rng)
            && let Err(err) = self.board.place(position, own)
        {
            log!("Computer produced an invalid move {}: {}", position, err);
        }
    }

    fn round_winner(&mut self) -> Option<&mut Player> {
        match self.board.winner(self.board.side_length()) {
            Some(mark) if mark == self.human.mark => Some(&mut self.human),
            Some(mark) if mark == self.computer.mark => Some(&mut self.computer),
            _ => None,
        }
    }

    fn update_scores(&mut self) {
        if let Some(winner) = self.round_winner() {
            winner.add_point();
        }
    }

    fn game_winner(&self) -> Option<&Player> {
        [&self.human, &self.computer]
            .into_iter()
            .find(|player| player.score == self.winning_score)
    }

    fn restart(&mut self) -> bool {
        if !yes(&input("Do you want to restart? (y/n)", &["y", "n", "yes", "no"])) {
            return false;
        }
        self.human.reset_score();
        self.computer.reset_score();
        self.reset_round();
        true
    }

    fn reset_round(&mut self) {
        self.board.reset();
        self.current_mark = self.first_mark;
        clear_screen();
    }

    fn display_board(&self) {
        prompt(&format!(
            "You're {}. Computer is {}.",
            self.human.mark, self.computer.mark
        ));
        println!();
        print!("{}", render_board(&self.board));
    }

    fn clear_screen_and_display_board(&self) {
        clear_screen();
        self.display_board();
    }

    fn display_result(&self) {
        self.clear_screen_and_display_board();

        match self.board.outcome() {
            GameOutcome::Win(mark) if mark == self.human.mark => {
                prompt(&format!("{} won!", self.human.name));
            }
            GameOutcome::Win(_) => prompt("Computer won!"),
            _ => prompt("The board is full! It's a tie!"),
        }
        log!("Round finished: {:?}", self.board.outcome());
    }

    fn display_scores(&self) {
        println!("{}: {}", self.human.name, self.human.score);
        println!("{}: {}", self.computer.name, self.computer.score);
    }

    fn display_game_winner(&self) {
        if let Some(winner) = self.game_winner() {
            prompt(&format!("{} won the game!", winner.name));
            log!(
                "Match finished {}:{} in favor of {}",
                self.human.score,
                self.computer.score,
                winner.name
            );
        }
    }
}

fn prompt_name() -> String {
    loop {
        prompt("What is your name?");
        let name = read_line();
        if !name.is_empty() {
            return name;
        }
        prompt("Not a valid name.");
    }
}

fn prompt_marker() -> Mark {
    let answer = input("Do you want to be X or O?", &["x", "o"]);
    if answer == "x" { Mark::X } else { Mark::O }
}

fn decide_first_mark(
    setting: FirstPlayerSetting,
    human: &Player,
    computer: &Player,
    rng: &mut GameRng,
) -> Mark {
    match setting {
        FirstPlayerSetting::Human => human.mark,
        FirstPlayerSetting::Computer => computer.mark,
        FirstPlayerSetting::Random => {
            if rng.random_bool() {
                human.mark
            } else {
                computer.mark
            }
        }
        FirstPlayerSetting::Choose => {
            let answer = input(
                "Do you want to go first? (y or n)",
                &["y", "yes", "n", "no"],
            );
            if yes(&answer) { human.mark } else { computer.mark }
        }
    }
}

fn decide_difficulty(config: &GameConfig, side_length: usize) -> Difficulty {
    let impossible_allowed = side_length <= MAX_SIDE_FOR_IMPOSSIBLE;

    match config.difficulty.as_difficulty() {
        Some(Difficulty::Impossible) if !impossible_allowed => {
            prompt("'Impossible' difficulty disabled.");
            prompt_difficulty(impossible_allowed)
        }
        Some(difficulty) => difficulty,
        None => prompt_difficulty(impossible_allowed),
    }
}

fn prompt_difficulty(impossible_allowed: bool) -> Difficulty {
    let (message, options): (&str, &[&str]) = if impossible_allowed {
        (
            "easy (e), hard (h), or impossible (i)",
            &["e", "easy", "h", "hard", "i", "impossible"],
        )
    } else {
        ("easy (e) or hard (h)", &["e", "easy", "h", "hard"])
    };

    prompt("Choose your difficulty:");
    let answer = input(message, options);

    match answer.chars().next() {
        Some('e') => Difficulty::Easy,
        Some('h') => Difficulty::Hard,
        _ => Difficulty::Impossible,
    }
}
