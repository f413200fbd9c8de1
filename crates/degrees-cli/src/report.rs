//! Rendering of separation results for the terminal.

use std::fmt;

use degrees_domain::Separation;

/// Plain-text view of a separation. People are shown by identifier:
///
/// ```text
/// Degrees of Separation: 1
///
/// 1. Movie: Sholay
/// Actor: amitabh-bachchan
/// Director: ramesh-sippy
/// ```
pub struct TextReport<'a>(pub &'a Separation);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Degrees of Separation: {}", self.0.degree)?;
        for hop in &self.0.hops {
            writeln!(f)?;
            writeln!(f, "{}. Movie: {}", hop.number, hop.collaboration)?;
            writeln!(f, "{}: {}", hop.left_role, hop.left)?;
            writeln!(f, "{}: {}", hop.right_role, hop.right)?;
        }
        Ok(())
    }
}

/// Renders a separation as the plain-text report.
pub fn render_text(separation: &Separation) -> String {
    TextReport(separation).to_string()
}

/// Renders a separation as pretty-printed JSON.
pub fn render_json(separation: &Separation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(separation)
}
