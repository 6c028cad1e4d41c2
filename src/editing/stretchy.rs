// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! StretchyPath - artwork that follows an editable four-sided frame
//!
//! The source artwork is fixed at construction. The frame starts as the
//! source's bounding rectangle and is edited through the `on_*` input
//! methods, which an event-routing layer calls with the results of pointer
//! interaction. Every successful edit triggers an arrangement pass that
//! rebuilds the display artwork from scratch.

use super::affordances::EditAffordances;
use super::events::{ArrangeState, StretchyEvent};
use super::frame::OutlineFrame;
use crate::path::CompositePath;
use crate::settings::StretchySettings;
use crate::warp::{
    FrameWarp, InvalidFrameError, SandwichProjector, Side, WarpError, transform_composite,
};
use kurbo::{Point, Rect};
use std::sync::mpsc::{self, Receiver, Sender};

/// Warped artwork together with the frame that drives it
#[derive(Debug)]
pub struct StretchyPath {
    /// Tolerances, accuracy and colors for this instance
    settings: StretchySettings,

    /// The artwork as it was handed in; never modified
    source: CompositePath,

    /// Bounds of `source`, used to normalize every point before projection
    source_bounds: Rect,

    /// The editable frame
    frame: OutlineFrame,

    /// The warped artwork; replaced wholesale by each successful pass
    display: CompositePath,

    /// Corner and midpoint handles for the current frame
    affordances: EditAffordances,

    state: ArrangeState,

    /// Count of successful arrangement passes
    generation: u64,

    subscribers: Vec<Sender<StretchyEvent>>,
}

impl StretchyPath {
    /// Wrap `source` in a frame matching its bounding rectangle
    pub fn new(source: CompositePath, settings: StretchySettings) -> Result<Self, WarpError> {
        let tolerance = settings.frame.corner_tolerance;
        let source_bounds = source
            .bounding_box()
            .ok_or(InvalidFrameError::EmptyArtwork)?;
        let frame = OutlineFrame::from_rect(source_bounds, tolerance)?;

        let mut stretchy = Self {
            display: source.clone(),
            affordances: EditAffordances::default(),
            settings,
            source,
            source_bounds,
            frame,
            state: ArrangeState::Idle,
            generation: 0,
            subscribers: Vec::new(),
        };
        stretchy.refresh_affordances();
        stretchy.arrange_contents()?;

        tracing::info!(
            contours = stretchy.source.contour_count(),
            nodes = stretchy.source.node_count(),
            "created stretchy path over {:?}",
            stretchy.source_bounds
        );
        Ok(stretchy)
    }

    /// Rebuild the display artwork from the source and the current frame
    ///
    /// On failure the previous display artwork stays in place, subscribers
    /// receive `ArrangeFailed`, and the error is returned.
    pub fn arrange_contents(&mut self) -> Result<(), WarpError> {
        if self.state == ArrangeState::Arranging {
            tracing::warn!("arrangement requested while one is running, dropping it");
            return Err(WarpError::ArrangementInProgress);
        }

        self.state = ArrangeState::Arranging;
        let result = self.build_display();
        self.state = ArrangeState::Idle;

        match result {
            Ok(display) => {
                self.display = display;
                self.generation += 1;
                tracing::debug!(generation = self.generation, "rearranged display artwork");
                self.emit(StretchyEvent::Rearranged {
                    generation: self.generation,
                });
                Ok(())
            }
            Err(error) => {
                tracing::warn!("arrangement failed, keeping previous artwork: {}", error);
                self.emit(StretchyEvent::ArrangeFailed {
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    /// The warped artwork from the last successful pass
    pub fn current_display_artwork(&self) -> &CompositePath {
        &self.display
    }

    /// Receive a `StretchyEvent` after every arrangement pass
    pub fn subscribe(&mut self) -> Receiver<StretchyEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Show or hide corner and midpoint handles
    pub fn set_edit_affordance_visibility(&mut self, visible: bool) {
        if self.affordances.visible != visible {
            tracing::debug!(visible, "edit affordance visibility changed");
        }
        self.affordances.visible = visible;
    }

    // ===== Input from the interactive-handle layer =====

    /// A corner handle was dragged to `to`
    ///
    /// Refused edits leave the frame untouched and run no pass.
    pub fn on_corner_moved(&mut self, index: usize, to: Point) -> Result<(), WarpError> {
        let tolerance = self.settings.frame.corner_tolerance;
        if let Err(error) = self.frame.move_corner(index, to, tolerance) {
            tracing::warn!("refused corner move: {}", error);
            return Err(error.into());
        }
        self.refresh_affordances();
        self.arrange_contents()
    }

    /// Any frame vertex was dragged to `to`; corners are routed to
    /// `on_corner_moved`
    pub fn on_control_point_moved(&mut self, vertex: usize, to: Point) -> Result<(), WarpError> {
        let tolerance = self.settings.frame.corner_tolerance;
        if let Some(corner) = self.frame.corner_at_vertex(vertex, tolerance) {
            return self.on_corner_moved(corner, to);
        }
        if let Err(error) = self.frame.move_vertex(vertex, to, tolerance) {
            tracing::warn!("refused control point move: {}", error);
            return Err(error.into());
        }
        self.refresh_affordances();
        self.arrange_contents()
    }

    /// Split side `side_index` at the position nearest to `split`
    ///
    /// Returns the frame index of the inserted vertex once the following
    /// arrangement pass has succeeded.
    pub fn on_midpoint_inserted(
        &mut self,
        side_index: usize,
        split: Point,
    ) -> Result<usize, WarpError> {
        let side = Side::from_index(side_index)
            .ok_or(InvalidFrameError::SideIndexOutOfRange { index: side_index })?;
        let vertex = match self.frame.insert_on_side(
            side,
            split,
            self.settings.frame.corner_tolerance,
            self.settings.frame.arclen_accuracy,
        ) {
            Ok(vertex) => vertex,
            Err(error) => {
                tracing::warn!("refused midpoint insertion on {:?}: {}", side, error);
                return Err(error);
            }
        };
        self.refresh_affordances();
        self.arrange_contents()?;
        Ok(vertex)
    }

    /// Hover entered or left the artwork
    ///
    /// Only affordance visibility changes; no pass is run.
    pub fn on_hover_changed(&mut self, hovering: bool) {
        if self.settings.affordances.visible_on_hover {
            self.set_edit_affordance_visibility(hovering);
        }
    }

    /// Put the frame back to the source's bounding rectangle
    pub fn reset_frame(&mut self) -> Result<(), WarpError> {
        self.frame =
            OutlineFrame::from_rect(self.source_bounds, self.settings.frame.corner_tolerance)?;
        self.refresh_affordances();
        self.arrange_contents()
    }

    /// Install a previously saved frame
    pub fn replace_outline_frame(&mut self, frame: OutlineFrame) -> Result<(), WarpError> {
        let frame = OutlineFrame::from_parts(
            frame.contour().clone(),
            *frame.corners(),
            self.settings.frame.corner_tolerance,
        )?;
        self.frame = frame;
        self.refresh_affordances();
        self.arrange_contents()
    }

    // ===== Accessors =====

    pub fn source_artwork(&self) -> &CompositePath {
        &self.source
    }

    pub fn source_bounds(&self) -> Rect {
        self.source_bounds
    }

    pub fn outline_frame(&self) -> &OutlineFrame {
        &self.frame
    }

    pub fn affordances(&self) -> &EditAffordances {
        &self.affordances
    }

    pub fn settings(&self) -> &StretchySettings {
        &self.settings
    }

    pub fn arrange_state(&self) -> ArrangeState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ===== Internals =====

    fn build_display(&self) -> Result<CompositePath, WarpError> {
        let frame_settings = &self.settings.frame;
        let parts = self.frame.decompose(frame_settings.corner_tolerance)?;
        let projector = SandwichProjector::from_decomposition(&parts, frame_settings.arclen_accuracy)?;
        let warp = FrameWarp::new(self.source_bounds, projector);
        Ok(transform_composite(&warp, &self.source))
    }

    fn refresh_affordances(&mut self) {
        let frame_settings = &self.settings.frame;
        let parts = match self.frame.decompose(frame_settings.corner_tolerance) {
            Ok(parts) => Some(parts),
            Err(error) => {
                tracing::debug!("affordances built without sides: {}", error);
                None
            }
        };
        self.affordances = EditAffordances::for_frame(
            &self.frame,
            parts.as_ref(),
            frame_settings.corner_tolerance,
            frame_settings.arclen_accuracy,
            self.affordances.visible,
        );
    }

    fn emit(&mut self, event: StretchyEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Contour, ContourNode};
    use crate::warp::DecompositionError;

    fn square_art() -> CompositePath {
        CompositePath::from_svg("M0 0 L10 0 L10 10 L0 10 Z").unwrap()
    }

    fn glyph_art() -> CompositePath {
        CompositePath::from_svg(
            "M0 0 C4 -2 8 -2 12 0 L12 20 C8 22 4 22 0 20 Z M3 5 L9 5 L9 15 L3 15 Z",
        )
        .unwrap()
    }

    fn stretchy(art: CompositePath) -> StretchyPath {
        StretchyPath::new(art, StretchySettings::default()).unwrap()
    }

    fn assert_near(a: Point, b: Point, tol: f64) {
        assert!((a - b).length() < tol, "{a:?} != {b:?}");
    }

    #[test]
    fn unedited_frame_is_identity() {
        let path = stretchy(glyph_art());
        let source = path.source_artwork();
        let display = path.current_display_artwork();

        assert_eq!(display.node_count(), source.node_count());
        for (s, d) in source.nodes().zip(display.nodes()) {
            assert_eq!(s.id, d.id);
            assert_near(s.point, d.point, 1e-9);
            if let (Some(a), Some(b)) = (s.handle_out, d.handle_out) {
                assert!((a - b).length() < 1e-6);
            }
            if let (Some(a), Some(b)) = (s.handle_in, d.handle_in) {
                assert!((a - b).length() < 1e-6);
            }
        }
        assert_eq!(path.generation(), 1);
        assert_eq!(path.arrange_state(), ArrangeState::Idle);
    }

    #[test]
    fn dragging_a_corner_moves_the_matching_point() {
        let mut path = stretchy(square_art());
        let id = path.source_artwork().contours[0].nodes[2].id;

        path.on_corner_moved(2, Point::new(20.0, 10.0)).unwrap();
        path.arrange_contents().unwrap();

        let moved = path.current_display_artwork().find_node(id).unwrap();
        assert_eq!(moved.point, Point::new(20.0, 10.0));
        let origin = path.current_display_artwork().contours[0].nodes[0].point;
        assert_eq!(origin, Point::new(0.0, 0.0));
    }

    #[test]
    fn stretched_frame_scales_interior_points() {
        let mut path = stretchy(CompositePath::from_svg("M0 0 L10 0 L10 10 L0 10 Z M5 5").unwrap());
        path.on_corner_moved(1, Point::new(20.0, 0.0)).unwrap();
        path.on_corner_moved(2, Point::new(20.0, 10.0)).unwrap();
        let center = path.current_display_artwork().contours[1].nodes[0].point;
        assert_near(center, Point::new(10.0, 5.0), 1e-9);
    }

    #[test]
    fn arranging_twice_is_idempotent() {
        let mut path = stretchy(glyph_art());
        path.on_corner_moved(3, Point::new(-4.0, 25.0)).unwrap();
        path.on_midpoint_inserted(0, Point::new(6.0, -6.0)).unwrap();

        path.arrange_contents().unwrap();
        let first = path.current_display_artwork().clone();
        path.arrange_contents().unwrap();
        assert_eq!(&first, path.current_display_artwork());
    }

    #[test]
    fn midpoint_on_top_keeps_corners_and_side_count() {
        let mut path = stretchy(square_art());
        let corners_before = *path.outline_frame().corners();

        let vertex = path.on_midpoint_inserted(0, Point::new(5.0, 0.0)).unwrap();
        assert_eq!(vertex, 1);
        assert_eq!(path.outline_frame().vertex_count(), 5);
        assert_eq!(*path.outline_frame().corners(), corners_before);
        let parts = path.outline_frame().decompose(1e-4).unwrap();
        assert_eq!(parts.sides.len(), 4);
        assert_eq!(parts.side(Side::Top).len(), 3);
        let frame = path.outline_frame();
        for (corner, point) in corners_before.iter().enumerate() {
            let vertex = frame.corner_vertex(corner, 1e-4).unwrap();
            assert_eq!(frame.contour().nodes[vertex].point, *point);
        }
    }

    #[test]
    fn corner_count_never_changes() {
        let mut path = stretchy(glyph_art());
        path.on_midpoint_inserted(0, Point::new(6.0, 0.0)).unwrap();
        path.on_midpoint_inserted(1, Point::new(12.0, 4.0)).unwrap();
        path.on_corner_moved(0, Point::new(-2.0, -2.0)).unwrap();
        path.on_midpoint_inserted(2, Point::new(6.0, 30.0)).unwrap();
        path.on_control_point_moved(1, Point::new(6.0, -5.0)).unwrap();

        assert_eq!(path.outline_frame().corners().len(), 4);
        assert_eq!(path.affordances().corners.len(), 4);
        assert_eq!(path.outline_frame().vertex_count(), 7);
        assert!(path.affordances().corners.iter().all(|c| c.vertex.is_some()));
    }

    #[test]
    fn moving_a_corner_vertex_routes_to_corner() {
        let mut path = stretchy(square_art());
        path.on_control_point_moved(2, Point::new(15.0, 15.0)).unwrap();
        assert_eq!(path.outline_frame().corners()[2], Point::new(15.0, 15.0));
    }

    #[test]
    fn non_finite_drag_leaves_frame_editable() {
        let mut path = stretchy(square_art());
        let frame_before = path.outline_frame().clone();
        let generation = path.generation();

        assert_eq!(
            path.on_corner_moved(2, Point::new(f64::NAN, 10.0)),
            Err(WarpError::InvalidFrame(InvalidFrameError::NonFinitePoint))
        );
        assert_eq!(path.outline_frame(), &frame_before);
        assert_eq!(path.generation(), generation);

        // the corner can still be found and dragged afterwards
        path.on_corner_moved(2, Point::new(12.0, 12.0)).unwrap();
        assert_eq!(path.outline_frame().contour().nodes[2].point, Point::new(12.0, 12.0));
    }

    #[test]
    fn broken_frame_keeps_previous_artwork() {
        let mut path = stretchy(square_art());
        path.on_corner_moved(2, Point::new(20.0, 10.0)).unwrap();
        let before = path.current_display_artwork().clone();
        let generation = path.generation();
        let events = path.subscribe();

        // corner 3 no longer sits on any vertex, so only three match
        let frame = OutlineFrame::from_parts(
            path.outline_frame().contour().clone(),
            [
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(20.0, 10.0),
                Point::new(-50.0, 50.0),
            ],
            1e-4,
        )
        .unwrap();
        let error = path.replace_outline_frame(frame).unwrap_err();

        assert_eq!(
            error,
            WarpError::Decomposition(DecompositionError::UnmatchedCorners { matched: 3 })
        );
        assert_eq!(path.current_display_artwork(), &before);
        assert_eq!(path.generation(), generation);
        assert_eq!(path.arrange_state(), ArrangeState::Idle);
        assert_eq!(events.try_recv(), Ok(StretchyEvent::ArrangeFailed { error }));
        // the midpoints still exist, just without sides
        assert!(path.affordances().midpoints.iter().all(|m| m.side.is_none()));
    }

    #[test]
    fn replaced_frame_is_checked_with_instance_tolerance() {
        let mut path = stretchy(square_art());
        let before = path.current_display_artwork().clone();
        // distinct at 1e-9, but not at the default corner tolerance
        let frame = OutlineFrame::from_parts(
            Contour::closed(vec![
                ContourNode::corner(Point::new(0.0, 0.0)),
                ContourNode::corner(Point::new(0.00001, 0.00001)),
                ContourNode::corner(Point::new(10.0, 10.0)),
                ContourNode::corner(Point::new(0.0, 10.0)),
            ]),
            [
                Point::new(0.0, 0.0),
                Point::new(0.00001, 0.00001),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            1e-9,
        )
        .unwrap();
        assert_eq!(
            path.replace_outline_frame(frame),
            Err(WarpError::InvalidFrame(InvalidFrameError::CoincidentCorners {
                first: 0,
                second: 1
            }))
        );
        assert_eq!(path.outline_frame().vertex_count(), 4);
        assert_eq!(path.outline_frame().corners()[1], Point::new(10.0, 0.0));
        assert_eq!(path.current_display_artwork(), &before);
    }

    #[test]
    fn refused_edits_leave_the_frame_alone() {
        let mut path = stretchy(square_art());
        let frame_before = path.outline_frame().clone();
        let generation = path.generation();

        assert_eq!(
            path.on_corner_moved(1, Point::new(0.0, 0.0)),
            Err(WarpError::InvalidFrame(InvalidFrameError::CoincidentCorners {
                first: 0,
                second: 1
            }))
        );
        assert_eq!(
            path.on_corner_moved(4, Point::new(3.0, 3.0)),
            Err(WarpError::InvalidFrame(InvalidFrameError::CornerIndexOutOfRange { index: 4 }))
        );
        assert_eq!(
            path.on_midpoint_inserted(9, Point::new(3.0, 3.0)),
            Err(WarpError::InvalidFrame(InvalidFrameError::SideIndexOutOfRange { index: 9 }))
        );
        assert!(path.on_midpoint_inserted(0, Point::new(10.0, 0.0)).is_err());

        assert_eq!(path.outline_frame(), &frame_before);
        assert_eq!(path.generation(), generation);
    }

    #[test]
    fn hover_only_toggles_affordances() {
        let mut path = stretchy(square_art());
        let events = path.subscribe();
        assert!(!path.affordances().visible);

        path.on_hover_changed(true);
        assert!(path.affordances().visible);
        path.on_hover_changed(false);
        assert!(!path.affordances().visible);
        assert!(events.try_recv().is_err());
        assert_eq!(path.generation(), 1);
    }

    #[test]
    fn hover_can_be_disabled_by_settings() {
        let mut settings = StretchySettings::default();
        settings.affordances.visible_on_hover = false;
        let mut path = StretchyPath::new(square_art(), settings).unwrap();
        path.on_hover_changed(true);
        assert!(!path.affordances().visible);
        path.set_edit_affordance_visibility(true);
        assert!(path.affordances().visible);
    }

    #[test]
    fn subscribers_see_each_pass() {
        let mut path = stretchy(square_art());
        let events = path.subscribe();
        path.on_corner_moved(2, Point::new(12.0, 12.0)).unwrap();
        path.arrange_contents().unwrap();

        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(
            received,
            vec![
                StretchyEvent::Rearranged { generation: 2 },
                StretchyEvent::Rearranged { generation: 3 },
            ]
        );
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut path = stretchy(square_art());
        drop(path.subscribe());
        path.arrange_contents().unwrap();
        assert!(path.subscribers.is_empty());
    }

    #[test]
    fn reset_restores_identity() {
        let mut path = stretchy(glyph_art());
        path.on_corner_moved(1, Point::new(30.0, -10.0)).unwrap();
        path.on_midpoint_inserted(3, Point::new(0.0, 10.0)).unwrap();
        path.reset_frame().unwrap();

        assert_eq!(path.outline_frame().vertex_count(), 4);
        for (s, d) in path.source_artwork().nodes().zip(path.current_display_artwork().nodes()) {
            assert_near(s.point, d.point, 1e-9);
        }
    }

    #[test]
    fn empty_artwork_is_rejected() {
        assert_eq!(
            StretchyPath::new(CompositePath::default(), StretchySettings::default()).unwrap_err(),
            WarpError::InvalidFrame(InvalidFrameError::EmptyArtwork)
        );
    }

    #[test]
    fn curved_frame_bends_straight_artwork_handles() {
        // bending the top side bends the handles of the glyph's top curve
        let mut path = stretchy(glyph_art());
        let before = path.current_display_artwork().contours[0].nodes[0]
            .handle_out
            .unwrap();
        let vertex = path.on_midpoint_inserted(0, Point::new(6.0, -1.5)).unwrap();
        path.on_control_point_moved(vertex, Point::new(6.0, -8.0)).unwrap();
        let after = path.current_display_artwork().contours[0].nodes[0]
            .handle_out
            .unwrap();
        assert!(after.y < before.y);
    }
}
