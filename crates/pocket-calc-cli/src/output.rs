//! Output formatting for `run` and `keys`

use console::{style, Color, Style};
use pocket_calc::core::{Calculator, DisplaySnapshot, Key};
use pocket_calc::keypad::{ButtonCategory, Keypad};
use serde::Serialize;

/// Display state after one key of a traced run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key label
    pub key: String,
    /// Display after the key
    pub display: DisplaySnapshot,
}

/// Everything `run` reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Labels of the keys pressed
    pub keys: Vec<String>,
    /// Per-key display states (traced runs only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    /// Final display
    pub display: DisplaySnapshot,
}

impl RunReport {
    /// Presses `keys` on a fresh engine
    #[must_use]
    pub fn run(keys: &[Key], trace: bool) -> Self {
        let mut calc = Calculator::new();
        let mut steps = Vec::new();
        for key in keys {
            calc.press(*key);
            if trace {
                steps.push(Step {
                    key: key.label(),
                    display: calc.snapshot(),
                });
            }
        }
        Self {
            keys: keys.iter().map(Key::label).collect(),
            steps,
            display: calc.snapshot(),
        }
    }
}

/// Column width of a display line in text output
const DISPLAY_WIDTH: usize = 24;

fn display_lines(display: &DisplaySnapshot) -> String {
    let pending = display.pending.map_or(String::new(), |op| format!(" {op}"));
    let secondary = format!("{}{pending}", display.secondary);
    format!(
        "{}\n{}",
        style(format!("{secondary:>DISPLAY_WIDTH$}")).dim(),
        style(format!("{:>DISPLAY_WIDTH$}", display.primary)).bold()
    )
}

/// Text form of a run: the trace table (if any) then both display lines
#[must_use]
pub fn render_run_text(report: &RunReport) -> String {
    let mut out = String::new();
    for step in &report.steps {
        out.push_str(&format!(
            "{:>4}  {:>12}  {:>DISPLAY_WIDTH$}\n",
            style(&step.key).cyan(),
            step.display.secondary,
            step.display.primary
        ));
    }
    if !report.steps.is_empty() {
        out.push('\n');
    }
    out.push_str(&display_lines(&report.display));
    out
}

/// One keypad button as exported by `keys --format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonInfo {
    /// Button face
    pub label: String,
    /// Grid row
    pub row: usize,
    /// First grid column
    pub col: usize,
    /// Columns covered
    pub span: usize,
    /// Color category
    pub category: ButtonCategory,
    /// Background color
    pub color: &'static str,
}

/// Exports the keypad layout
#[must_use]
pub fn keypad_buttons(keypad: &Keypad) -> Vec<ButtonInfo> {
    keypad
        .buttons()
        .iter()
        .map(|b| ButtonInfo {
            label: b.label(),
            row: b.row,
            col: b.col,
            span: b.span,
            category: b.category(),
            color: b.category().color(),
        })
        .collect()
}

fn category_style(category: ButtonCategory) -> Style {
    let background = match category {
        ButtonCategory::Number => Color::Color256(236),
        ButtonCategory::Operator => Color::Color256(208),
        ButtonCategory::Function => Color::Color256(247),
    };
    Style::new().bg(background).fg(Color::White).bold()
}

/// Text form of the keypad: one line per row, buttons colored by category
#[must_use]
pub fn render_keypad_text(keypad: &Keypad) -> String {
    const CELL: usize = 6;
    let (rows, _) = keypad.dimensions();
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let line: Vec<String> = keypad
            .buttons()
            .iter()
            .filter(|b| b.row == row)
            .map(|b| {
                let width = CELL * b.span - 1;
                category_style(b.category())
                    .apply_to(format!("{:^width$}", b.label()))
                    .to_string()
            })
            .collect();
        lines.push(line.join(" "));
    }
    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pocket_calc::core::parse_sequence;

    fn report(script: &str, trace: bool) -> RunReport {
        RunReport::run(&parse_sequence(script).unwrap(), trace)
    }

    #[test]
    fn test_run_report_final_display() {
        let report = report("7 + 8 =", false);
        assert_eq!(report.display.primary, "15");
        assert_eq!(report.keys, ["7", "+", "8", "="]);
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_run_report_trace() {
        let report = report("5 + 3 +", true);
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[3].display.secondary, "8");
    }

    #[test]
    fn test_run_text_contains_both_lines() {
        console::set_colors_enabled(false);
        let text = render_run_text(&report("1 2 X 3", false));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].trim(), "12 X");
        assert_eq!(lines[1].trim(), "3");
    }

    #[test]
    fn test_run_text_trace_table() {
        console::set_colors_enabled(false);
        let text = render_run_text(&report("9 / 0 =", true));
        assert!(text.lines().count() >= 5);
        assert!(text.contains("Infinity"));
    }

    #[test]
    fn test_run_report_json_omits_empty_steps() {
        let json = serde_json::to_value(report("4", false)).unwrap();
        assert!(json.get("steps").is_none());
        assert_eq!(json["display"]["primary"], "4");
    }

    #[test]
    fn test_keypad_export() {
        let buttons = keypad_buttons(&Keypad::new());
        assert_eq!(buttons.len(), 19);
        let zero = buttons.iter().find(|b| b.label == "0").unwrap();
        assert_eq!(zero.span, 2);
        assert_eq!(zero.color, "#2D2D2D");
        let json = serde_json::to_value(&buttons[0]).unwrap();
        assert_eq!(json["label"], "AC");
        assert_eq!(json["category"], "function");
    }

    #[test]
    fn test_keypad_text_rows() {
        console::set_colors_enabled(false);
        let text = render_keypad_text(&Keypad::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("AC"));
        assert!(lines[4].contains('='));
    }
}
