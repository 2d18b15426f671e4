mod frame;
mod schedule;
mod timing;

pub mod types;

pub use frame::{checksum, reverse_bits, Frame, FRAME_LEN};
pub use schedule::{DataSegment, InvalidRepeatCount, Schedule, SegmentKind, SegmentOrder};
pub use timing::{Microseconds, Pulse, TimingConfig};
pub use types::*;
