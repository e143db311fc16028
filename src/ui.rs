/// UI rendering: the property panel overlaid on the rendered shape
use crate::config::PanelConfig;
use crate::draw::FontDescriptor;
use crate::report::PropertyReport;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Vertical offset of the first text line below the panel's top padding
const PANEL_TEXT_TOP_OFFSET: f64 = 5.0;

/// Render the property report as a right-aligned panel in the top-right corner.
///
/// Every line is measured first; the widest line plus padding determines the
/// panel width. The semi-transparent background is painted before any text,
/// so the panel always sits on top of the shape beneath it.
pub fn render_property_panel(
    ctx: &cairo::Context,
    report: &PropertyReport,
    style: &PanelConfig,
    surface_width: i32,
) {
    let lines: Vec<String> = report.lines.iter().map(ToString::to_string).collect();
    if lines.is_empty() {
        return;
    }

    let descriptor = FontDescriptor::new(style.font_family.as_str());

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc =
        pango::FontDescription::from_string(&descriptor.to_pango_string(style.font_size));
    layout.set_font_description(Some(&font_desc));

    // Measure every line up front; the panel is sized to the widest one.
    let mut line_widths = Vec::with_capacity(lines.len());
    let mut max_width: f64 = 0.0;
    for line in &lines {
        layout.set_text(line);
        let (width, _) = layout.pixel_size();
        let width = f64::from(width);
        line_widths.push(width);
        max_width = max_width.max(width);
    }

    let padding = style.padding;
    let panel_x = f64::from(surface_width) - max_width - padding * 2.0;
    let panel_y = padding;
    let panel_width = max_width + padding * 2.0;
    let panel_height = lines.len() as f64 * style.line_height + padding * 2.0;

    // Semi-transparent background rectangle for the text block
    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(panel_x, panel_y, panel_width, panel_height);
    let _ = ctx.fill();

    // Lines right-aligned against the panel's inner edge, top to bottom
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    let right_edge = f64::from(surface_width) - padding;
    for (i, line) in lines.iter().enumerate() {
        layout.set_text(line);
        let text_x = right_edge - line_widths[i];
        let text_y = padding + PANEL_TEXT_TOP_OFFSET + i as f64 * style.line_height;
        ctx.move_to(text_x, text_y);
        pangocairo::functions::show_layout(ctx, &layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::draw::{Canvas, ShapeKind, ShapeParams, color};
    use crate::report::build_report;

    #[test]
    fn panel_background_lightens_the_top_right_corner() {
        let mut canvas = Canvas::new(640, 480).unwrap();
        let params = ShapeParams {
            kind: ShapeKind::Square,
            size: 40.0,
            stroke_width: 3.0,
            fill_color: color::TOMATO,
        };
        let report = build_report(&params, &ReportConfig::default()).unwrap();
        let style = PanelConfig::default();

        canvas.clear([0.0, 0.0, 0.0, 1.0]).unwrap();
        {
            let ctx = canvas.context().unwrap();
            render_property_panel(&ctx, &report, &style, 640);
        }

        // White at 0.8 alpha over opaque black reads back around 204.
        let probe_x = 640 - style.padding as i32 - 2;
        let probe_y = style.padding as i32 + 2;
        let [r, g, b, a] = canvas.pixel_at(probe_x, probe_y).unwrap();
        assert!(r > 180 && g > 180 && b > 180, "panel not painted: {r} {g} {b}");
        assert_eq!(a, 255);

        // Far corner outside the panel stays black.
        let [r, g, b, _] = canvas.pixel_at(2, 470).unwrap();
        assert_eq!((r, g, b), (0, 0, 0));
    }

    #[test]
    fn empty_reports_paint_nothing() {
        let mut canvas = Canvas::new(64, 64).unwrap();
        let report = PropertyReport {
            shape: "Circle".to_string(),
            lines: Vec::new(),
        };

        canvas.clear([0.0, 0.0, 0.0, 1.0]).unwrap();
        {
            let ctx = canvas.context().unwrap();
            render_property_panel(&ctx, &report, &PanelConfig::default(), 64);
        }

        let [r, g, b, _] = canvas.pixel_at(60, 12).unwrap();
        assert_eq!((r, g, b), (0, 0, 0));
    }
}
