use std::io::{self, Write};

const BAR_ROWS: usize = 6;

/// Pack two modules into one terminal cell using half-block glyphs, so an
/// EAN-13 (95 modules) preview fits in an 80-column terminal.
fn module_pair_glyph(left: u8, right: u8) -> char {
    match (left, right) {
        (1, 1) => '█',
        (1, _) => '▌',
        (_, 1) => '▐',
        _ => ' ',
    }
}

fn bar_line(modules: &[u8]) -> String {
    modules
        .chunks(2)
        .map(|pair| module_pair_glyph(pair[0], *pair.get(1).unwrap_or(&0)))
        .collect()
}

/// Draw the encoded bars as a boxed unicode preview with the human-readable
/// value centered beneath.
pub fn draw(modules: &[u8], value: &str, writer: &mut impl Write) -> io::Result<()> {
    let bars = bar_line(modules);
    let inner = bars.chars().count().max(value.chars().count() + 2);

    writeln!(writer, "┌{}┐", "─".repeat(inner + 2))?;
    for _ in 0..BAR_ROWS {
        writeln!(writer, "│ {bars:^inner$} │")?;
    }
    writeln!(writer, "│ {value:^inner$} │")?;
    writeln!(writer, "└{}┘", "─".repeat(inner + 2))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_cover_all_pairings() {
        assert_eq!(module_pair_glyph(1, 1), '█');
        assert_eq!(module_pair_glyph(1, 0), '▌');
        assert_eq!(module_pair_glyph(0, 1), '▐');
        assert_eq!(module_pair_glyph(0, 0), ' ');
    }

    #[test]
    fn bar_line_pads_odd_module_counts() {
        assert_eq!(bar_line(&[1, 0, 1]), "▌▌");
    }

    #[test]
    fn draw_emits_box_with_value() {
        let mut out = Vec::new();
        draw(&[1, 0, 1, 1], "TEST", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BAR_ROWS + 3);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[BAR_ROWS + 1].contains("TEST"));
        assert!(lines.last().unwrap().starts_with('└'));
    }
}
