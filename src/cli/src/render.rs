use cube_core::{Color, CubeState, Face};
use itertools::Itertools;
use lbl_solver::{MoveRecord, SolveReport};
use owo_colors::{OwoColorize, Rgb};

const NET_ROWS: [&[Face]; 3] = [&[Face::U], &[Face::L, Face::F, Face::R, Face::B], &[Face::D]];

/// Terminal output, either with colored stickers or with color letters.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub color: bool,
}

fn rgb(color: Color) -> Rgb {
    match color {
        Color::White => Rgb(255, 255, 255),
        Color::Yellow => Rgb(255, 213, 0),
        Color::Green => Rgb(0, 155, 72),
        Color::Blue => Rgb(0, 70, 173),
        Color::Orange => Rgb(255, 88, 0),
        Color::Red => Rgb(183, 18, 52),
    }
}

impl Renderer {
    fn sticker(self, color: Color) -> String {
        if self.color {
            "██".color(rgb(color)).to_string()
        } else {
            format!("{} ", color.letter())
        }
    }

    /// The unfolded net: U above F, then L F R B, then D below F.
    pub fn net(self, state: &CubeState) -> String {
        if !self.color {
            return state.to_string();
        }
        let mut out = String::new();
        for faces in NET_ROWS {
            let indent = if faces.len() == 1 { " ".repeat(7) } else { String::new() };
            for row in 0..3 {
                let line = faces
                    .iter()
                    .map(|&face| {
                        state[face][row * 3..row * 3 + 3]
                            .iter()
                            .map(|&color| self.sticker(color))
                            .join("")
                    })
                    .join(" ");
                out.push_str(&indent);
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }

    /// One line per phase, in solving order.
    pub fn solution(self, records: &[MoveRecord]) -> String {
        records
            .iter()
            .chunk_by(|record| record.phase)
            .into_iter()
            .map(|(phase, moves)| {
                let moves = moves.collect_vec();
                let label = format!("{:<5} ({:>2})", phase.name(), moves.len());
                let label = if self.color {
                    label.bold().to_string()
                } else {
                    label
                };
                format!("{label}  {}", moves.iter().join(" "))
            })
            .join("\n")
    }

    pub fn verdict(self, report: &SolveReport) -> String {
        let verdict = match (report.is_solved(), self.color) {
            (true, true) => "solved".green().to_string(),
            (false, true) => "NOT solved".red().to_string(),
            (true, false) => "solved".to_owned(),
            (false, false) => "NOT solved".to_owned(),
        };
        format!(
            "{} moves in {:.3}ms, {verdict}",
            report.records.len(),
            report.elapsed.as_secs_f64() * 1000.0
        )
    }
}
