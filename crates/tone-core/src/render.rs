//! Buffer-filling entry point invoked on the platform's real-time audio thread.

use crate::oscillator::Oscillator;
use crate::session::StreamFormat;

/// A mono signal source the audio device pulls interleaved buffers from.
///
/// Implementations run on the real-time thread: no allocation, no locks, no
/// panics. Every call must fill the whole buffer.
pub trait RenderSource: Send + 'static {
    /// Called once with the negotiated format before the first buffer.
    fn prepare(&mut self, format: StreamFormat);

    fn channels(&self) -> usize;

    fn next_sample(&mut self) -> f32;

    /// Fill an interleaved buffer, duplicating each mono sample across every
    /// channel of its frame. A trailing partial frame is filled too.
    #[inline]
    fn render_with<T, F>(&mut self, out: &mut [T], convert: F)
    where
        T: Clone,
        F: Fn(f32) -> T,
    {
        let channels = self.channels().max(1);
        for frame in out.chunks_mut(channels) {
            frame.fill(convert(self.next_sample()));
        }
    }

    #[inline]
    fn render(&mut self, out: &mut [f32]) {
        self.render_with(out, |s| s);
    }
}

impl RenderSource for Oscillator {
    fn prepare(&mut self, format: StreamFormat) {
        Oscillator::prepare(self, format);
    }

    #[inline]
    fn channels(&self) -> usize {
        Oscillator::channels(self)
    }

    #[inline]
    fn next_sample(&mut self) -> f32 {
        Oscillator::next_sample(self)
    }
}
