// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! SVG export - writes display artwork and the frame overlay
//!
//! Colors and handle sizes come from the `StretchySettings` the path was
//! built with.

use crate::editing::StretchyPath;
use crate::theme::Color;
use kurbo::{Point, Rect, Shape};

/// Padding around the drawing, in design units
const MARGIN: f64 = 8.0;

/// Write a standalone SVG document for `path`
///
/// With `show_frame`, the frame outline is drawn on top of the artwork,
/// and corner and midpoint handles are drawn when affordances are visible.
pub fn svg_document(path: &StretchyPath, show_frame: bool) -> String {
    let style = &path.settings().style;
    let artwork = path.current_display_artwork().to_bezpath();
    let frame = path.outline_frame().contour().to_bezpath();

    let mut bounds = content_bounds(path);
    if show_frame {
        bounds = bounds.union(frame.bounding_box());
    }
    let radius = path
        .settings()
        .affordances
        .corner_radius
        .max(path.settings().affordances.midpoint_radius);
    let view = bounds.inflate(MARGIN + radius, MARGIN + radius);

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        view.x0,
        view.y0,
        view.width(),
        view.height()
    );
    svg.push_str(&format!(
        "  <path d=\"{}\" {} fill-rule=\"evenodd\"/>\n",
        artwork.to_svg(),
        paint("fill", style.artwork_color)
    ));

    if show_frame {
        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" {} stroke-width=\"1\"/>\n",
            frame.to_svg(),
            paint("stroke", style.outline_color)
        ));
        let affordances = path.affordances();
        if affordances.visible {
            let settings = &path.settings().affordances;
            for corner in &affordances.corners {
                svg.push_str(&handle(corner.point, settings.corner_radius, style.corner_color));
            }
            for midpoint in &affordances.midpoints {
                svg.push_str(&handle(
                    midpoint.point,
                    settings.midpoint_radius,
                    style.midpoint_color,
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Bounds used for the document viewBox, before padding
pub fn content_bounds(path: &StretchyPath) -> Rect {
    path.current_display_artwork()
        .bounding_box()
        .unwrap_or_else(|| path.source_bounds())
}

/// A filled circle marking a frame handle
fn handle(center: Point, radius: f64, color: Color) -> String {
    format!(
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>\n",
        center.x,
        center.y,
        radius,
        paint("fill", color)
    )
}

/// Paint attribute plus opacity when the color is translucent
fn paint(attr: &str, color: Color) -> String {
    let rgba = color.to_rgba8();
    let rgb = format!(r#"{attr}="rgb({}, {}, {})""#, rgba.r, rgba.g, rgba.b);
    if rgba.a == u8::MAX {
        rgb
    } else {
        format!(r#"{rgb} {attr}-opacity="{:.3}""#, color.components[3])
    }
}
