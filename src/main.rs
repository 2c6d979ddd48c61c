mod game;
mod input;
mod render;

pub type FieldInt = i16;
pub type Coords = (FieldInt, FieldInt);

fn main() {
    // run() returns once the game has ended and a non-directional key
    // was pressed, or immediately on a quit key.
    let mut game = game::Game::new();
    game.run();
}
