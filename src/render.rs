use std::io::{stdout, Stdout};

use crate::{Coords, FieldInt};

use crossterm::{cursor, execute, style, terminal};
use crossterm::terminal::ClearType;

const HORIZONTAL_BORDER_SYMBOL: &str = "───";
const VERTICAL_BORDER_SYMBOL: &str = "┆";
const CORNER_BORDER_SYMBOL: &str = "★";
const EMPTY_SYMBOL: &str = "   ";
const SNAKE_SYMBOL: &str = " ▩ ";
const SNAKE_HEAD_SYMBOL: &str = " ▩ ";
const SNAKE_TAIL_SYMBOL: &str = " ▩ ";
const FOOD_SYMBOL: &str = " ▪ ";
const CELL_WIDTH: usize = 3;
const ALLOW_BORDERS: bool = true;

/// What a single field cell holds, in priority order: the head wins
/// over the tail on a length-1 snake, and the snake hides any food
/// cell it is currently passing over.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Cell {
    Head,
    Tail,
    Body,
    Food,
    Empty,
}

pub struct Screen {
    size: usize,
    stdout: Stdout,
}

impl Screen {
    pub fn new(size: usize) -> Self {
        Screen { size, stdout: stdout() }
    }

    pub fn setup(&mut self) {
        terminal::enable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        execute!(self.stdout, cursor::Show).expect("Error showing cursor.");
        terminal::disable_raw_mode().expect("Error unsetting raw mode.");
    }

    pub fn draw_field(&mut self, snake: &[Coords], food: &[Coords]) {
        let lines = self.field_lines(snake, food);
        self.draw(lines);
    }

    pub fn draw_welcome(&mut self) {
        let lines = vec![
            self.text_line(""),
            self.text_line("Welcome to SNAKE game"),
            self.text_line(""),
            self.text_line(""),
            self.text_line(""),
            self.text_line("Press WASD to start"),
        ];

        self.draw(lines);
    }

    pub fn draw_result(&mut self, reason: &str, score: usize) {
        let lines = vec![
            self.text_line(""),
            self.text_line("GAME OVER"),
            self.text_line(""),
            self.text_line(""),
            self.text_line(&format!("Your score: {}", score)),
            self.text_line(""),
            self.text_line(""),
            self.text_line(&format!("Reason: {}", reason)),
        ];

        self.draw(lines);
    }

    ///////////////////////////////////////////////////////////////////////////

    fn field_lines(&self, snake: &[Coords], food: &[Coords]) -> Vec<String> {
        (0..self.size as FieldInt)
            .map(|y| {
                (0..self.size as FieldInt)
                    .map(|x| glyph(classify((x, y), snake, food)))
                    .collect()
            })
            .collect()
    }

    /// Centers `text` within the pixel width of the field. Padding is
    /// split floor-left / ceil-right, so an odd remainder puts the
    /// extra space on the right. A text of exactly `size` characters
    /// passes through unchanged.
    fn text_line(&self, text: &str) -> String {
        if text.is_empty() {
            return EMPTY_SYMBOL.repeat(self.size);
        }

        let length = text.chars().count();
        if length == self.size {
            return text.to_string();
        }

        let padding = (self.size * CELL_WIDTH).saturating_sub(length);
        let left = padding / 2;
        let right = padding - left;

        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
    }

    /// Pads or truncates to exactly `size` content lines, then wraps
    /// them with the border chrome.
    fn frame(&self, mut lines: Vec<String>) -> Vec<String> {
        while lines.len() < self.size {
            lines.push(self.text_line(""));
        }
        lines.truncate(self.size);

        if !ALLOW_BORDERS {
            return lines;
        }

        let horizontal = self.horizontal_border_line();
        let mut framed = Vec::with_capacity(self.size + 2);

        framed.push(horizontal.clone());
        for line in lines {
            framed.push(format!(
                "{}{}{}",
                VERTICAL_BORDER_SYMBOL, line, VERTICAL_BORDER_SYMBOL
            ));
        }
        framed.push(horizontal);

        framed
    }

    fn horizontal_border_line(&self) -> String {
        let outer = self.size + 2;

        (0..outer)
            .map(|i| {
                if i == 0 || i == outer - 1 {
                    CORNER_BORDER_SYMBOL
                } else {
                    HORIZONTAL_BORDER_SYMBOL
                }
            })
            .collect()
    }

    // The whole frame goes out in a single write to avoid flicker.
    // Raw mode needs explicit carriage returns.
    fn draw(&mut self, lines: Vec<String>) {
        let blob = self.frame(lines).join("\r\n");

        execute!(
            self.stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::All),
            style::Print(blob)
        )
        .expect("Error drawing frame.");
    }
}

fn classify(pos: Coords, snake: &[Coords], food: &[Coords]) -> Cell {
    match snake.iter().position(|&part| part == pos) {
        Some(index) if index == snake.len() - 1 => Cell::Head,
        Some(0) => Cell::Tail,
        Some(_) => Cell::Body,
        None if food.contains(&pos) => Cell::Food,
        None => Cell::Empty,
    }
}

fn glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Head => SNAKE_HEAD_SYMBOL,
        Cell::Tail => SNAKE_TAIL_SYMBOL,
        Cell::Body => SNAKE_SYMBOL,
        Cell::Food => FOOD_SYMBOL,
        Cell::Empty => EMPTY_SYMBOL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::new(10)
    }

    #[test]
    fn empty_text_line_is_a_full_row_of_spaces() {
        let line = screen().text_line("");
        assert_eq!(line, " ".repeat(30));
    }

    #[test]
    fn text_line_splits_odd_padding_floor_left() {
        // 21 characters against 30 columns: 4 spaces left, 5 right
        let line = screen().text_line("Welcome to SNAKE game");

        assert_eq!(line.chars().count(), 30);
        assert!(line.starts_with("    W"));
        assert!(line.ends_with("game     "));
    }

    #[test]
    fn text_line_splits_even_padding_equally() {
        let line = screen().text_line("GAME OVER");

        // 9 characters against 30 columns: 10 spaces + text + 11 spaces
        assert_eq!(line, format!("{}GAME OVER{}", " ".repeat(10), " ".repeat(11)));
    }

    #[test]
    fn text_of_exactly_field_size_passes_through() {
        let line = screen().text_line("0123456789");
        assert_eq!(line, "0123456789");
    }

    #[test]
    fn head_outranks_tail_on_a_single_cell_snake() {
        let snake = vec![(3, 3)];
        assert_eq!(classify((3, 3), &snake, &[]), Cell::Head);
    }

    #[test]
    fn cells_are_classified_in_priority_order() {
        let snake = vec![(1, 1), (2, 1), (3, 1)];
        let food = vec![(5, 5)];

        assert_eq!(classify((3, 1), &snake, &food), Cell::Head);
        assert_eq!(classify((1, 1), &snake, &food), Cell::Tail);
        assert_eq!(classify((2, 1), &snake, &food), Cell::Body);
        assert_eq!(classify((5, 5), &snake, &food), Cell::Food);
        assert_eq!(classify((0, 0), &snake, &food), Cell::Empty);
    }

    #[test]
    fn snake_hides_the_food_cell_it_covers() {
        let snake = vec![(2, 2), (3, 2)];
        let food = vec![(2, 2)];

        assert_eq!(classify((2, 2), &snake, &food), Cell::Tail);
    }

    #[test]
    fn field_lines_are_square_and_cell_aligned() {
        let snake = vec![(0, 0), (1, 0)];
        let food = vec![(9, 9)];
        let lines = screen().field_lines(&snake, &food);

        assert_eq!(lines.len(), 10);
        for line in &lines {
            assert_eq!(line.chars().count(), 30);
        }

        assert!(lines[0].starts_with(" ▩  ▩ "));
        assert!(lines[9].ends_with(" ▪ "));
    }

    #[test]
    fn bordered_frame_has_the_expected_chrome() {
        let s = screen();
        let framed = s.frame(s.field_lines(&[(4, 4)], &[(8, 8)]));

        assert_eq!(framed.len(), 12);

        // 10 fill glyphs of 3 chars each plus 2 corners
        for rule in [&framed[0], &framed[11]] {
            assert_eq!(rule.chars().count(), 32);
            assert!(rule.starts_with('★'));
            assert!(rule.ends_with('★'));
        }

        for row in &framed[1..11] {
            assert!(row.starts_with('┆'));
            assert!(row.ends_with('┆'));
        }
    }

    #[test]
    fn frame_pads_short_output_with_blank_lines() {
        let s = screen();
        let framed = s.frame(vec![s.text_line("GAME OVER")]);

        assert_eq!(framed.len(), 12);
        assert_eq!(framed[2], format!("┆{}┆", " ".repeat(30)));
    }

    #[test]
    fn frame_truncates_excess_lines() {
        let s = screen();
        let lines: Vec<String> = (0..15).map(|_| s.text_line("")).collect();

        assert_eq!(s.frame(lines).len(), 12);
    }
}
