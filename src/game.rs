use std::{thread::sleep, time::Duration};

use crate::{Coords, FieldInt};
use crate::input::{self, InputEvent};
use crate::render::Screen;

use rand::Rng;

use Direction::*;
use EndReason::*;

pub const FIELD_SIZE: FieldInt = 10;
const TICK_INTERVAL_MS: u64 = 300;
const SPAWN_MARGIN: FieldInt = 3;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    fn step(self, (x, y): Coords) -> Coords {
        match self {
            Up => (x, y - 1),
            Down => (x, y + 1),
            Left => (x - 1, y),
            Right => (x + 1, y),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EndReason {
    OutOfField,
    SelfHarm,
}

impl EndReason {
    pub fn as_str(self) -> &'static str {
        match self {
            OutOfField => "out of field",
            SelfHarm => "self harm",
        }
    }
}

pub struct Game {
    started: bool,
    end_reason: Option<EndReason>,
    pending: Direction,
    executing: Direction,
    snake: Vec<Coords>, // tail at index 0, head last
    food: Vec<Coords>,
}

impl Game {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();

        // Spawn away from the walls so the default direction has room
        let spawn = (
            rng.gen_range(SPAWN_MARGIN..=FIELD_SIZE - SPAWN_MARGIN - 1),
            rng.gen_range(SPAWN_MARGIN..=FIELD_SIZE - SPAWN_MARGIN - 1),
        );
        let snake = vec![spawn];
        let food = vec![free_cell(&mut rng, &snake)];

        Game {
            started: false,
            end_reason: None,
            pending: Right,
            executing: Right,
            snake,
            food,
        }
    }

    pub fn run(&mut self) {
        let mut screen = Screen::new(FIELD_SIZE as usize);
        screen.setup();
        self.render(&mut screen);

        while !self.ended() {
            for event in input::drain_events() {
                match event {
                    InputEvent::Turn(direction) => self.receive_command(direction),
                    InputEvent::Quit => {
                        screen.restore();
                        return;
                    }
                }
            }

            if self.started {
                self.tick();
                self.render(&mut screen);
            }

            sleep(Duration::from_millis(TICK_INTERVAL_MS));
        }

        // The result screen stays up until a non-directional key is
        // pressed; directional keys only flip flags that are already set.
        loop {
            match input::next_event() {
                InputEvent::Turn(direction) => self.receive_command(direction),
                InputEvent::Quit => break,
            }
        }

        screen.restore();
    }

    pub fn receive_command(&mut self, direction: Direction) {
        self.pending = direction;
        self.started = true;
    }

    /// Advances the game by one step. Direction legality is enforced
    /// here, not at input time: a commanded reversal of the direction
    /// currently being executed is discarded.
    pub fn tick(&mut self) {
        if self.pending == self.executing.opposite() {
            self.pending = self.executing;
        }
        self.executing = self.pending;

        let new_head = self.executing.step(self.head());

        if out_of_field(new_head) {
            self.end_reason = Some(OutOfField);
            return;
        }

        // The snake grows on the tick its tail reaches the food cell,
        // after the head has passed over it.
        let tail = self.snake[0];
        if self.food.contains(&tail) {
            self.respawn_food(new_head);
        } else {
            self.snake.remove(0);
        }

        if self.snake.contains(&new_head) {
            self.end_reason = Some(SelfHarm);
            return;
        }

        self.snake.push(new_head);
    }

    pub fn ended(&self) -> bool {
        self.end_reason.is_some()
    }

    fn head(&self) -> Coords {
        *self.snake.last().unwrap()
    }

    fn respawn_food(&mut self, new_head: Coords) {
        let mut occupied = self.snake.clone();
        occupied.push(new_head);
        self.food = vec![free_cell(&mut rand::thread_rng(), &occupied)];
    }

    fn render(&self, screen: &mut Screen) {
        if !self.started {
            screen.draw_welcome();
        } else if let Some(reason) = self.end_reason {
            screen.draw_result(reason.as_str(), self.snake.len());
        } else {
            screen.draw_field(&self.snake, &self.food);
        }
    }
}

fn out_of_field((x, y): Coords) -> bool {
    x < 0 || y < 0 || x >= FIELD_SIZE || y >= FIELD_SIZE
}

fn random_cell(rng: &mut impl Rng) -> Coords {
    (rng.gen_range(0..FIELD_SIZE), rng.gen_range(0..FIELD_SIZE))
}

fn free_cell(rng: &mut impl Rng, occupied: &[Coords]) -> Coords {
    loop {
        let cell = random_cell(rng);
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}
