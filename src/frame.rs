/// Frame metadata - carries the frame number and derived timing info.
///
/// Everything here is a pure function of the frame number and the animation
/// totals, so rendering the same frame twice yields identical scenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u32,
    pub total: u32,
    pub time: f32,
}

impl FrameInfo {
    pub fn new(number: u32, total: u32, frame_rate: f32) -> Self {
        Self {
            number,
            total,
            time: number as f32 / frame_rate,
        }
    }

    /// Fraction of the animation completed at this frame, in [0, 1)
    pub fn progress(&self) -> f32 {
        self.number as f32 / self.total as f32
    }
}

/// Finite iterator yielding one `FrameInfo` per animation frame.
/// Use this in a loop: `for frame in FrameRange::new(n, fps) { ... }`
pub struct FrameRange {
    next: u32,
    total: u32,
    frame_rate: f32,
}

impl FrameRange {
    pub fn new(total: u32, frame_rate: f32) -> Self {
        Self {
            next: 0,
            total,
            frame_rate,
        }
    }

    /// Single frame lookup without iterating
    pub fn frame(&self, number: u32) -> FrameInfo {
        FrameInfo::new(number, self.total, self.frame_rate)
    }
}

impl Iterator for FrameRange {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.next >= self.total {
            return None;
        }
        let info = FrameInfo::new(self.next, self.total, self.frame_rate);
        self.next += 1;
        Some(info)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameRange {}
