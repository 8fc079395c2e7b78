use design::{HexColor, Stroke, SurfacePoint};

/// Accumulates raw pointer samples for one pen gesture.
#[derive(Clone, Debug, Default)]
pub struct StrokeRecorder {
    buffer: Option<Vec<SurfacePoint>>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh buffer seeded with the pointer-down sample.
    pub fn begin(&mut self, point: SurfacePoint) {
        self.buffer = Some(vec![point]);
    }

    /// Append a sample. Returns false when no gesture is open.
    pub fn extend(&mut self, point: SurfacePoint) -> bool {
        match &mut self.buffer {
            Some(points) => {
                points.push(point);
                true
            }
            None => false,
        }
    }

    /// Close the gesture. Only a gesture that moved at least once becomes a
    /// stroke; a bare click is dropped.
    pub fn finish(&mut self, color: HexColor, width: f64) -> Option<Stroke> {
        let points = self.buffer.take()?;
        (points.len() > 1).then(|| Stroke::new(points, color, width))
    }

    /// Drop any in-progress samples.
    pub fn cancel(&mut self) {
        self.buffer = None;
    }

    pub fn is_recording(&self) -> bool {
        self.buffer.is_some()
    }

    /// Samples recorded so far, for drawing the live stroke.
    pub fn points(&self) -> &[SurfacePoint] {
        self.buffer.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_without_move_commits_nothing() {
        let mut recorder = StrokeRecorder::new();
        recorder.begin(SurfacePoint::new(1.0, 1.0));
        assert!(recorder.finish(HexColor::BLACK, 2.0).is_none());
        assert!(!recorder.is_recording());
    }

    #[test]
    fn down_move_move_up_records_three_points() {
        let mut recorder = StrokeRecorder::new();
        recorder.begin(SurfacePoint::new(0.0, 0.0));
        assert!(recorder.extend(SurfacePoint::new(1.0, 2.0)));
        assert!(recorder.extend(SurfacePoint::new(3.0, 4.0)));

        let stroke = recorder.finish(HexColor::new(255, 0, 0), 4.0).unwrap();
        assert_eq!(stroke.len(), 3);
        assert_eq!(stroke.points[2], SurfacePoint::new(3.0, 4.0));
        assert_eq!(stroke.color, HexColor::new(255, 0, 0));
        assert_eq!(stroke.width, 4.0);
        assert!(!stroke.smoothed);
        assert!(recorder.points().is_empty());
    }

    #[test]
    fn extend_without_begin_is_ignored() {
        let mut recorder = StrokeRecorder::new();
        assert!(!recorder.extend(SurfacePoint::new(1.0, 1.0)));
        assert!(recorder.finish(HexColor::BLACK, 2.0).is_none());
    }

    #[test]
    fn cancel_discards_buffer() {
        let mut recorder = StrokeRecorder::new();
        recorder.begin(SurfacePoint::new(0.0, 0.0));
        recorder.extend(SurfacePoint::new(5.0, 5.0));
        recorder.cancel();
        assert!(recorder.finish(HexColor::BLACK, 2.0).is_none());
    }
}
