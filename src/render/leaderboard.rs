use super::*;

/// Ranking table for one scoring window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Leaderboard(pub Window);

impl From<Window> for Leaderboard {
    fn from(window: Window) -> Self {
        Self(window)
    }
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "<table class=\"table\"><thead><tr><th>#</th><th>Player</th><th>Points</th></tr></thead><tbody>"
        )?;
        for row in self.0.standings() {
            write!(
                f,
                "<tr><td>#{}</td><td>{}</td><td>{}</td></tr>",
                row.pos,
                escape_html(row.name),
                row.points
            )?;
        }
        write!(f, "</tbody></table>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(html: &str) -> Vec<(String, String, String)> {
        html.split("<tr><td>")
            .skip(1)
            .map(|row| {
                let cells = row
                    .split("</tr>")
                    .next()
                    .unwrap_or_default()
                    .split("</td><td>")
                    .map(|c| c.trim_end_matches("</td>").to_string())
                    .collect::<Vec<_>>();
                (cells[0].clone(), cells[1].clone(), cells[2].clone())
            })
            .collect()
    }

    #[test]
    fn weekly_rows_in_order() {
        let html = Leaderboard(Window::Weekly).to_string();
        let rows = rows(&html);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ("#1".into(), "PlayerThree".into(), "1980".into()));
        assert_eq!(rows[1], ("#2".into(), "PlayerTwo".into(), "1760".into()));
        assert_eq!(rows[4], ("#5".into(), "PlayerSeven".into(), "1110".into()));
    }

    #[test]
    fn unknown_mode_renders_overall() {
        assert_eq!(
            Leaderboard(Window::from("daily")).to_string(),
            Leaderboard(Window::Overall).to_string()
        );
        assert!(Leaderboard::default().to_string().contains("<td>15230</td>"));
    }
}
