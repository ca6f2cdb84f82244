use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH};

/// The number of cells in a winning alignment
pub const WINDOW_LEN: usize = 4;

/// The number of distinct alignment windows on the board
pub const WINDOW_COUNT: usize = HEIGHT * (WIDTH - WINDOW_LEN + 1)
    + WIDTH * (HEIGHT - WINDOW_LEN + 1)
    + 2 * (WIDTH - WINDOW_LEN + 1) * (HEIGHT - WINDOW_LEN + 1);

// every (row, column) quad that can hold a four-in-a-row, enumerated
// horizontals first, then verticals, then the two diagonal directions
const fn windows() -> [[(usize, usize); WINDOW_LEN]; WINDOW_COUNT] {
    let mut windows = [[(0, 0); WINDOW_LEN]; WINDOW_COUNT];
    let mut index = 0;

    // horizontal
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column + WINDOW_LEN <= WIDTH {
            let mut i = 0;
            while i < WINDOW_LEN {
                windows[index][i] = (row, column + i);
                i += 1;
            }
            index += 1;
            column += 1;
        }
        row += 1;
    }

    // vertical
    let mut row = 0;
    while row + WINDOW_LEN <= HEIGHT {
        let mut column = 0;
        while column < WIDTH {
            let mut i = 0;
            while i < WINDOW_LEN {
                windows[index][i] = (row + i, column);
                i += 1;
            }
            index += 1;
            column += 1;
        }
        row += 1;
    }

    // diagonal, sloping down to the right
    let mut row = 0;
    while row + WINDOW_LEN <= HEIGHT {
        let mut column = 0;
        while column + WINDOW_LEN <= WIDTH {
            let mut i = 0;
            while i < WINDOW_LEN {
                windows[index][i] = (row + i, column + i);
                i += 1;
            }
            index += 1;
            column += 1;
        }
        row += 1;
    }

    // diagonal, sloping down to the left
    let mut row = 0;
    while row + WINDOW_LEN <= HEIGHT {
        let mut column = WINDOW_LEN - 1;
        while column < WIDTH {
            let mut i = 0;
            while i < WINDOW_LEN {
                windows[index][i] = (row + i, column - i);
                i += 1;
            }
            index += 1;
            column += 1;
        }
        row += 1;
    }

    windows
}

/// All length-4 windows on the board, shared by win detection and the
/// search heuristic
pub const WINDOWS: [[(usize, usize); WINDOW_LEN]; WINDOW_COUNT] = windows();

/// Returns the columns ordered from the middle outwards, as the middle
/// columns are often better moves; equal distances favour the left column
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let center = WIDTH / 2;
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = if i % 2 == 0 {
            center + i / 2
        } else {
            center - (i + 1) / 2
        };
        i += 1;
    }
    move_order
}

pub const MOVE_ORDER: [usize; WIDTH] = move_order();

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Replays a string of 1-indexed column digits, alternating players
    /// starting with player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let column = column - 1;
                    if !board.is_legal(column) {
                        return Err(anyhow!("Invalid move, column {} full", column + 1));
                    }
                    // abort if the position is won at any point
                    if let GameState::Won(_) = board.outcome() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board.play(column, player);
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The cell at `row`/`column`, row 0 being the top of the board
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * (HEIGHT - 1 - row)]
    }

    pub fn is_legal(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    /// Drops a tile into the lowest free cell of `column` and returns the
    /// row it lands in. The column must not be full, see [`is_legal`]
    ///
    /// [`is_legal`]: #method.is_legal
    pub fn play(&mut self, column: usize, player: Player) -> usize {
        debug_assert!(self.is_legal(column));
        self.cells[column + WIDTH * self.heights[column]] = player.cell();
        self.heights[column] += 1;
        HEIGHT - self.heights[column]
    }

    /// Validating counterpart of [`play`] for moves arriving from outside
    ///
    /// [`play`]: #method.play
    pub fn play_checked(&mut self, column: usize, player: Player) -> Result<usize> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column + 1,
                WIDTH
            ));
        }
        if self.heights[column] >= HEIGHT {
            return Err(anyhow!("Invalid move, column {} full", column + 1));
        }
        Ok(self.play(column, player))
    }

    /// Returns a copy of the board with one extra move played, leaving
    /// `self` untouched
    pub fn with_play(&self, column: usize, player: Player) -> Board {
        let mut next = *self;
        next.play(column, player);
        next
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.is_legal(column))
    }

    pub fn legal_moves_center_first(&self) -> impl Iterator<Item = usize> + '_ {
        MOVE_ORDER
            .iter()
            .copied()
            .filter(move |&column| self.is_legal(column))
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height == HEIGHT)
    }

    /// Scans every alignment window for a winner; a full board with no
    /// winner is a draw
    pub fn outcome(&self) -> GameState {
        for window in WINDOWS.iter() {
            if let Some(player) = self.window_winner(window) {
                return GameState::Won(player);
            }
        }
        if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }

    fn window_winner(&self, window: &[(usize, usize); WINDOW_LEN]) -> Option<Player> {
        let (row, column) = window[0];
        let player = self.get(row, column).player()?;
        for &(row, column) in window[1..].iter() {
            if self.get(row, column) != player.cell() {
                return None;
            }
        }
        Some(player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
