/// Durations of emitter on/off time, in microseconds.
pub type Microseconds = u16;

/// One carrier-on duration followed by one carrier-off duration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    pub on: Microseconds,
    pub off: Microseconds,
}

/// The receiver's timing profile.
///
/// These are configuration, not algorithm: pass a different profile to
/// retarget another receiver without touching the encoding. For the gaps to
/// stay decodable, `one_gap` must be longer than `zero_gap`, and both must be
/// distinguishable from `bit_mark`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Leading pulse before the data bits of every repetition.
    pub header: Pulse,
    /// Fixed carrier-on duration marking each bit boundary.
    pub bit_mark: Microseconds,
    /// Carrier-off duration encoding a 0 bit.
    pub zero_gap: Microseconds,
    /// Carrier-off duration encoding a 1 bit.
    pub one_gap: Microseconds,
    /// Pulse telling the receiver another repetition follows.
    pub repeat_spacer: Pulse,
    /// Pulse closing the whole transmission. Same durations as the spacer on
    /// this receiver, but semantically distinct; don't fold them together.
    pub trailer: Pulse,
}

impl Default for TimingConfig {
    /// The captured profile of the supported receiver.
    fn default() -> Self {
        TimingConfig {
            header: Pulse { on: 3400, off: 1750 },
            bit_mark: 450,
            zero_gap: 420,
            one_gap: 1300,
            repeat_spacer: Pulse { on: 440, off: 17100 },
            trailer: Pulse { on: 440, off: 17100 },
        }
    }
}
