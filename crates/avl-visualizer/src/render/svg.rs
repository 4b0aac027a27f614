use crate::layout::Scene;

use super::Theme;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders `scene` as a standalone SVG document.
///
/// Edges are emitted before nodes so circles cover the line ends.
pub fn render_svg(scene: &Scene, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = scene.width,
        h = scene.height
    ));
    out.push_str(&format!("  <title>{}</title>\n", escape(&theme.title)));
    out.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        theme.background
    ));

    if !scene.edges.is_empty() {
        out.push_str(&format!(
            "  <g stroke=\"{}\" stroke-width=\"{}\">\n",
            theme.edge, theme.edge_width
        ));
        for e in &scene.edges {
            out.push_str(&format!(
                "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>\n",
                e.from.x, e.from.y, e.to.x, e.to.y
            ));
        }
        out.push_str("  </g>\n");
    }

    for n in &scene.nodes {
        out.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            n.at.x, n.at.y, scene.node_radius, theme.node_fill, theme.node_outline, theme.edge_width
        ));
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>\n",
            n.at.x,
            n.at.y,
            theme.label,
            escape(&theme.font_family),
            theme.font_size,
            escape(&n.label)
        ));
    }

    out.push_str("</svg>\n");
    out
}
