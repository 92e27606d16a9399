use std::fmt::Write;

use crate::variants::RouteVariant;

/// Presentation style for turning route variants into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantRenderMode {
    PlainText,
    RichText,
}

impl RouteVariant {
    fn display_duration(&self) -> String {
        self.duration_text
            .clone()
            .unwrap_or_else(|| format!("{:.0} min", self.duration_minutes))
    }

    fn display_distance(&self) -> String {
        match (&self.distance_text, self.distance_km) {
            (Some(text), _) => text.clone(),
            (None, Some(km)) => format!("{km:.2} km"),
            (None, None) => "? km".to_string(),
        }
    }
}

/// Render variants in the requested textual mode.
pub fn render_variants(variants: &[RouteVariant], mode: VariantRenderMode) -> String {
    match mode {
        VariantRenderMode::PlainText => render_plain(variants),
        VariantRenderMode::RichText => render_rich(variants),
    }
}

fn render_plain(variants: &[RouteVariant]) -> String {
    let mut buffer = String::new();
    for variant in variants {
        let _ = writeln!(
            buffer,
            "{:<20} {:>10} {:>10}  light {:>4.1}/10  ({} waypoints)",
            variant.id.label(),
            variant.display_duration(),
            variant.display_distance(),
            variant.light_score,
            variant.path.len()
        );
    }
    buffer
}

fn render_rich(variants: &[RouteVariant]) -> String {
    let mut buffer = String::new();
    for variant in variants {
        let _ = writeln!(
            buffer,
            "* **{}** (`{}`): {}, {}, light score `{:.1}`/10",
            variant.label,
            variant.id,
            variant.display_duration(),
            variant.display_distance(),
            variant.light_score
        );
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::CandidateBuilder;
    use crate::variants::select_variants;

    fn variants() -> [RouteVariant; 3] {
        let a = CandidateBuilder::new()
            .point(45.0, -75.0)
            .duration(10.0)
            .text("0.9 km", "10 mins")
            .scored(1.25);
        let b = CandidateBuilder::new()
            .point(45.0, -75.0)
            .no_distance()
            .duration(14.6)
            .scored(7.0);
        select_variants(&[a, b]).expect("selects")
    }

    #[test]
    fn plain_text_lists_every_variant() {
        let text = render_variants(&variants(), VariantRenderMode::PlainText);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Fastest route"));
        assert!(lines[0].contains("10 mins"));
        assert!(lines[0].contains("0.9 km"));
        assert!(lines[0].contains("light  1.2/10") || lines[0].contains("light  1.3/10"));
        assert!(lines[2].starts_with("Most Well Lit route"));
        assert!(lines[2].contains("15 min"));
        assert!(lines[2].contains("? km"));
    }

    #[test]
    fn rich_text_uses_ids() {
        let text = render_variants(&variants(), VariantRenderMode::RichText);
        assert!(text.contains("* **Balanced route** (`balanced`)"));
        assert!(text.contains("(`most-lit`)"));
        assert!(text.contains("light score `7.0`/10"));
    }
}
