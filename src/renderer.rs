use crate::grids::{Direction, WallGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderStyle {
    Plain,
    /// Marks the entry at the first cell and the exit at the last cell.
    Arrows,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle::Plain
    }
}

/// Draws a grid with underscores and pipes.
///
/// Each cell prints its own south and east edges only, the north and west
/// edges come from the neighbor above and to the left. The outer border is
/// always closed apart from the arrows.
pub struct TextRenderer {
    pub style: RenderStyle,
}

impl TextRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn render(&self, grid: &WallGrid) -> String {
        let columns = grid.columns();
        let south = Direction::South.bits();
        let east = Direction::East.bits();

        // every line is 2 * columns + 1 wide plus the newline
        let mut out = String::with_capacity((grid.rows() + 1) * (2 * columns + 2));

        // north border
        out.push(' ');
        out.push_str(&"_".repeat(2 * columns - 1));
        out.push('\n');

        let last_row = grid.rows() - 1;
        for y in 0..grid.rows() {
            let row = grid.row(y);
            let mut line = String::with_capacity(2 * columns + 1);

            // west border
            if self.style == RenderStyle::Arrows && y == 0 {
                line.push('>');
            } else {
                line.push('|');
            }

            for (x, &cell) in row.iter().enumerate() {
                line.push(if cell & south != 0 { ' ' } else { '_' });

                if cell & east != 0 {
                    // the corner between two cells keeps an underscore only
                    // if both have their south wall up
                    let below_open = (cell | row[x + 1]) & south != 0;
                    line.push(if below_open { ' ' } else { '_' });
                } else if self.style == RenderStyle::Arrows && y == last_row && x == columns - 1 {
                    line.push('>');
                } else {
                    line.push('|');
                }
            }

            out.push_str(&line);
            out.push('\n');
        }

        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(RenderStyle::default())
    }
}
