#![no_std]

//! aircon_ir
//!
//! Reverse-engineered infrared protocol for a fixed-frame air conditioner
//! remote. The encoding was worked out by capturing the stock remote's output
//! over many test configurations; this library reproduces the observed frames
//! and their timing bit-exactly, since the receiver silently drops anything
//! else.
//!
//! A command is an 18-byte frame. Bytes are transmitted least-significant bit
//! first, and all byte values in this crate use that convention: bit 0 of a
//! stored byte is the first symbol on the wire. Twelve bytes are fixed,
//! five carry the settings fields, and the last byte is a checksum.
//!
//! Observed field map (byte index, transmitted symbol positions, 0-indexed):
//!
//! * Power: byte 5, symbol 5. `0`=off, `1`=on
//! * Mode, primary copy: byte 6, symbols 3-4. `10`=heat, `01`=dry, `11`=cold/auto
//! * Temperature: byte 7, symbols 0-3. Setpoint minus 16, sent
//!   most-significant bit first: `0000`=16 .. `1111`=31
//! * Mode, secondary copy: byte 8, symbols 1-2. `00`=heat, `10`=dry, `11`=cold/auto
//! * Fan speed: byte 9, symbols 0-1. `00`=auto, `10`=low, `01`=middle, `11`=high
//! * Fan direction: byte 9, symbols 3-5. `000`=auto, `100`=lowest, `010`=low,
//!   `110`=middle, `001`=high, `011`=highest, `111`=loop
//! * Checksum: byte 17, the sum of the other 17 byte values modulo 256
//!
//! There is no code to drive an infrared LED here. Each bit becomes a fixed
//! carrier-on mark followed by a carrier-off gap whose length encodes the bit
//! value, the data block is wrapped in header/repeat/trailer pulses, and the
//! result is handed to a [`PulseEmitter`](emitter::PulseEmitter)
//! implementation you bind to your platform's wave API (pigpio and the like).
//!
//! ## General Usage
//!
//! Encode settings into a frame:
//!
//! ```
//! use aircon_ir::{Frame, Settings, Power, Mode, FanSpeed, FanDirection};
//!
//! let frame = Frame::from_settings(&Settings {
//!     power: Power::On,
//!     mode: Mode::Heat,
//!     temperature: 25,
//!     fan_speed: FanSpeed::Auto,
//!     fan_direction: FanDirection::Auto,
//! });
//!
//! // Remember: bit 0 of each stored byte is the first transmitted symbol.
//! assert_eq!(frame.bytes()[5], 0b0010_0000);
//! assert_eq!(frame.bytes()[17], aircon_ir::checksum(&frame.bytes()[..17]));
//! ```
//!
//! Turn a frame into a transmittable pulse schedule:
//!
//! ```
//! use aircon_ir::{
//!     DataSegment, Frame, FanDirection, FanSpeed, Mode, Power, Schedule,
//!     SegmentKind, Settings, TimingConfig,
//! };
//!
//! let frame = Frame::from_settings(&Settings {
//!     power: Power::On,
//!     mode: Mode::Cold,
//!     temperature: 26,
//!     fan_speed: FanSpeed::High,
//!     fan_direction: FanDirection::Middle,
//! });
//!
//! let timing = TimingConfig::default();
//! let data = DataSegment::from_frame(&frame, &timing);
//! let schedule = Schedule::sequence(data, &timing, 1).unwrap();
//!
//! let order: Vec<SegmentKind> = schedule.order().collect();
//! assert_eq!(order, [
//!     SegmentKind::Header, SegmentKind::Data, SegmentKind::RepeatSpacer,
//!     SegmentKind::Header, SegmentKind::Data, SegmentKind::Trailer,
//! ]);
//! ```

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod emitter;
pub mod protocol;

#[doc(inline)]
pub use protocol::*;
