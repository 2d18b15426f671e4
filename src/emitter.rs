//! Boundary to the physical pulse emitter.
//!
//! The library computes duration lists; something platform-specific has to
//! turn them into a modulated infrared waveform. That something implements
//! [`PulseEmitter`], typically as a thin binding over a wave API such as
//! pigpio's. The contract mirrors those APIs: clear previously staged waves,
//! stage each pulse-train definition for a handle, then transmit an ordered
//! handle list, strictly in that sequence. The emitter is one shared physical
//! transmitter, so nothing here is safe to interleave between callers.

use crate::protocol::{
    DataSegment, Frame, InvalidRepeatCount, Microseconds, Schedule, SegmentKind, Settings,
    TimingConfig,
};

/// Handle for a staged pulse train. Non-negative when staging succeeded; a
/// negative value is the emitter's own error code.
pub type WaveId = i32;

pub trait PulseEmitter {
    /// Drops every previously staged pulse train.
    fn reset(&mut self);

    /// Registers one pulse-train definition from an alternating on/off
    /// duration list and returns its handle, or a negative error code.
    fn stage(&mut self, durations: &[Microseconds]) -> WaveId;

    /// Physically transmits staged pulse trains in the given order and
    /// returns the emitter's status code.
    fn transmit<I>(&mut self, waves: I) -> i32
    where
        I: IntoIterator<Item = WaveId>;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitError {
    /// Negative repeat count, rejected before anything was staged.
    InvalidRepeatCount,
    /// An emitter `stage` call failed; carries its code verbatim.
    Staging(WaveId),
}

impl From<InvalidRepeatCount> for TransmitError {
    fn from(_: InvalidRepeatCount) -> Self {
        TransmitError::InvalidRepeatCount
    }
}

/// Stages one wave per segment shape (never one per bit) and transmits them
/// in schedule order.
///
/// Aborts on the first failed staging, before any transmission is attempted.
/// The transmit status comes back verbatim; retrying is the caller's policy,
/// not ours.
pub fn send_schedule<E>(emitter: &mut E, schedule: &Schedule) -> Result<i32, TransmitError>
where
    E: PulseEmitter,
{
    emitter.reset();

    let mut waves = [0 as WaveId; SegmentKind::ALL.len()];
    for &kind in SegmentKind::ALL.iter() {
        let id = emitter.stage(schedule.segment(kind));
        if id < 0 {
            return Err(TransmitError::Staging(id));
        }
        waves[kind as usize] = id;
    }

    Ok(emitter.transmit(schedule.order().map(|kind| waves[kind as usize])))
}

/// The whole pipeline in one call: settings to frame to pulse schedule to
/// emitter.
pub fn send<E>(
    emitter: &mut E,
    settings: &Settings,
    timing: &TimingConfig,
    repeats: i32,
) -> Result<i32, TransmitError>
where
    E: PulseEmitter,
{
    let frame = Frame::from_settings(settings);
    let data = DataSegment::from_frame(&frame, timing);
    let schedule = Schedule::sequence(data, timing, repeats)?;
    send_schedule(emitter, &schedule)
}
