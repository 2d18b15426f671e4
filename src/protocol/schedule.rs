use heapless::Vec;

use super::frame::{Frame, FRAME_LEN};
use super::timing::{Microseconds, TimingConfig};

// Every frame bit becomes one mark/gap duration pair.
const DATA_DURATIONS: usize = FRAME_LEN * 8 * 2;

/// The data block of the schedule: a flat on/off duration list covering all
/// 144 frame bits in transmission order.
pub struct DataSegment(Vec<Microseconds, DATA_DURATIONS>);

impl DataSegment {
    /// Pulse-distance encoding: a fixed carrier-on mark bounds every bit, and
    /// the length of the carrier-off gap after it carries the bit value.
    pub fn from_frame(frame: &Frame, timing: &TimingConfig) -> Self {
        let mut durations = Vec::new();
        for bit in frame.transmission_bits() {
            // capacity is exactly one pair per bit
            durations.push(timing.bit_mark).ok();
            durations
                .push(if bit { timing.one_gap } else { timing.zero_gap })
                .ok();
        }
        DataSegment(durations)
    }

    pub fn durations(&self) -> &[Microseconds] {
        &self.0
    }
}

/// The four pulse-train shapes a transmission is assembled from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentKind {
    Header,
    Data,
    RepeatSpacer,
    Trailer,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 4] = [
        SegmentKind::Header,
        SegmentKind::Data,
        SegmentKind::RepeatSpacer,
        SegmentKind::Trailer,
    ];
}

/// Rejected repeat count. Negative repeats are a caller bug, and the schedule
/// is refused outright rather than clamped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidRepeatCount;

/// A fully ordered transmission: header + data sent `repeats + 1` times, a
/// repeat spacer between consecutive repetitions, one trailer at the very
/// end. Segments are fixed once built; re-encode to change anything.
pub struct Schedule {
    header: [Microseconds; 2],
    data: DataSegment,
    repeat_spacer: [Microseconds; 2],
    trailer: [Microseconds; 2],
    repeats: u32,
}

impl Schedule {
    pub fn sequence(
        data: DataSegment,
        timing: &TimingConfig,
        repeats: i32,
    ) -> Result<Self, InvalidRepeatCount> {
        if repeats < 0 {
            return Err(InvalidRepeatCount);
        }

        Ok(Schedule {
            header: [timing.header.on, timing.header.off],
            data,
            repeat_spacer: [timing.repeat_spacer.on, timing.repeat_spacer.off],
            trailer: [timing.trailer.on, timing.trailer.off],
            repeats: repeats as u32,
        })
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    /// The duration list for one segment shape.
    pub fn segment(&self, kind: SegmentKind) -> &[Microseconds] {
        match kind {
            SegmentKind::Header => &self.header,
            SegmentKind::Data => self.data.durations(),
            SegmentKind::RepeatSpacer => &self.repeat_spacer,
            SegmentKind::Trailer => &self.trailer,
        }
    }

    /// Segment emission order. The ordering, not the segment shapes, is the
    /// part of the protocol a receiver is pickiest about.
    pub fn order(&self) -> SegmentOrder {
        SegmentOrder {
            repeats: self.repeats,
            pos: 0,
        }
    }

    /// The whole schedule flattened to on/off durations, emission order.
    pub fn durations(&self) -> impl Iterator<Item = Microseconds> + '_ {
        self.order().flat_map(move |kind| self.segment(kind).iter().copied())
    }
}

/// Iterator over a schedule's segment order.
pub struct SegmentOrder {
    repeats: u32,
    pos: u64,
}

impl Iterator for SegmentOrder {
    type Item = SegmentKind;

    // Slots come in threes: header, data, then either a repeat spacer
    // (another repetition follows) or the trailer (that was the last one).
    fn next(&mut self) -> Option<SegmentKind> {
        if self.pos >= 3 * (self.repeats as u64 + 1) {
            return None;
        }

        let kind = match self.pos % 3 {
            0 => SegmentKind::Header,
            1 => SegmentKind::Data,
            _ if self.pos / 3 < self.repeats as u64 => SegmentKind::RepeatSpacer,
            _ => SegmentKind::Trailer,
        };
        self.pos += 1;
        Some(kind)
    }
}
