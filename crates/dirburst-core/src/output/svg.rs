/// SVG output — writes a chart scene as a standalone vector document.
///
/// The document is a `canvas_size` square with one group translated to the
/// chart centre. Every arc is a `<path>` with a `<title>` child (the hover
/// text, shown natively by browsers) and, when wide enough, a centred
/// `<text>` label.
use super::ExportError;
use crate::chart::ChartScene;
use crate::color::Rgb;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Stroke separating neighbouring arcs.
const ARC_STROKE: Rgb = Rgb::WHITE;

const LABEL_FONT_SIZE: f64 = 10.0;

/// Render `scene` as an SVG document.
pub fn render_svg(scene: &ChartScene) -> String {
    let mut svg = String::with_capacity(256 + scene.arcs.len() * 256);
    let size = scene.canvas_size;

    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <g transform="translate({},{})" font-family="sans-serif">"#,
        scene.center.x, scene.center.y
    );

    for arc in &scene.arcs {
        let _ = writeln!(
            svg,
            r#"    <path d="{}" fill="{}" stroke="{}"><title>{}&#10;{}</title></path>"#,
            arc.path.to_svg_data(),
            arc.fill.to_hex(),
            ARC_STROKE.to_hex(),
            escape_xml(&arc.tooltip.title),
            escape_xml(&arc.tooltip.detail),
        );
    }
    // Labels go last so no arc paints over them.
    for label in scene.labels() {
        let _ = writeln!(
            svg,
            r#"    <text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle" font-size="{LABEL_FONT_SIZE}" fill="{}" pointer-events="none">{}</text>"#,
            label.position.x,
            label.position.y,
            ARC_STROKE.to_hex(),
            escape_xml(&label.text),
        );
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Render `scene` and write it to `path`.
pub fn write_svg(scene: &ChartScene, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, render_svg(scene)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote SVG chart to {}", path.display());
    Ok(())
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartController;
    use crate::config::ChartConfig;
    use crate::testing::{dir, file, sample_tree, tree};

    #[test]
    fn test_document_frame() {
        let t = sample_tree();
        let chart = ChartController::new(&t, ChartConfig::default());
        let svg = render_svg(chart.scene());

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="620" height="620""#));
        assert!(svg.contains(r#"<g transform="translate(310,310)""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<path ").count(), t.len());
    }

    #[test]
    fn test_labels_and_titles_are_escaped() {
        let t = tree(&dir("root", vec![file("a<b>&c", 10)]));
        let chart = ChartController::new(&t, ChartConfig::default());
        let svg = render_svg(chart.scene());

        assert!(svg.contains("<title>a&lt;b&gt;&amp;c&#10;0.00 MB</title>"));
        assert!(svg.contains(">a&lt;b&gt;&amp;c (0.00 MB)</text>"));
        assert!(!svg.contains("a<b>"));
    }

    #[test]
    fn test_root_is_full_disc() {
        let t = tree(&file("only.bin", 5));
        let chart = ChartController::new(&t, ChartConfig::default());
        let svg = render_svg(chart.scene());
        assert!(svg.contains(r#"d="M 300,0 A 300,300 0 0 1 -300,0"#));
        assert!(svg.contains(r##"fill="#26d9d9""##));
    }

    #[test]
    fn test_write_svg_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let t = sample_tree();
        let chart = ChartController::new(&t, ChartConfig::default());

        write_svg(chart.scene(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_svg(chart.scene()));
    }
}
